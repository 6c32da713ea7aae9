use std::sync::Arc;

use recipe_scaler::api::{ScalerConfig, build_scaling_pass};
use recipe_scaler::core::{NumberLocale, ServingsSource};
use recipe_scaler::page::{
    PageSnapshot, ScalingTargetState, ServingsInputState, SubmitControlState,
};

fn input(value: &str, base: Option<&str>) -> ServingsInputState {
    ServingsInputState {
        value: Some(value.to_owned()),
        base: base.map(str::to_owned),
        is_input_control: true,
    }
}

fn target(base: Option<&str>) -> ScalingTargetState {
    ScalingTargetState {
        base: base.map(str::to_owned),
    }
}

fn submit(is_input_control: bool) -> SubmitControlState {
    SubmitControlState {
        is_input_control,
        disabled: true,
    }
}

fn snapshot(query: &str, language: &str) -> PageSnapshot {
    PageSnapshot {
        query: query.to_owned(),
        language: language.to_owned(),
        ..PageSnapshot::default()
    }
}

fn texts(snapshot: &PageSnapshot, config: &ScalerConfig) -> Vec<(usize, String)> {
    build_scaling_pass(snapshot, config, None)
        .patch
        .target_texts
        .into_iter()
        .map(|target| (target.index, target.text))
        .collect()
}

#[test]
fn query_servings_scale_against_first_input_base() {
    let mut page = snapshot("?servings=4", "en");
    page.servings_inputs.push(input("2", Some("2")));
    page.scaling_targets.push(target(Some("50")));
    page.scaling_targets.push(target(Some("33.333")));

    let pass = build_scaling_pass(&page, &ScalerConfig::default(), None);

    assert_eq!(pass.outcome.resolution.factor, 2.0);
    assert_eq!(
        texts(&page, &ScalerConfig::default()),
        vec![(0, "100".to_owned()), (1, "66.67".to_owned())]
    );
    assert_eq!(pass.patch.servings_value, 4.0);
    assert_eq!(pass.outcome.servings_value, "4");
}

#[test]
fn bare_page_renders_bases_unchanged() {
    let mut page = snapshot("", "en");
    page.scaling_targets.push(target(Some("250")));
    page.scaling_targets.push(target(Some("7.5")));
    page.scaling_targets.push(target(Some("1.005")));

    let pass = build_scaling_pass(&page, &ScalerConfig::default(), None);

    assert!(pass.outcome.resolution.is_identity());
    assert_eq!(
        texts(&page, &ScalerConfig::default()),
        vec![
            (0, "250".to_owned()),
            (1, "7.5".to_owned()),
            (2, "1".to_owned())
        ]
    );
}

#[test]
fn targets_without_usable_base_are_skipped() {
    let mut page = snapshot("?servings=2", "en");
    page.scaling_targets.push(target(None));
    page.scaling_targets.push(target(Some("a pinch")));
    page.scaling_targets.push(target(Some("3")));

    let pass = build_scaling_pass(&page, &ScalerConfig::default(), None);

    assert_eq!(pass.outcome.skipped_targets, vec![0, 1]);
    assert_eq!(pass.patch.target_texts.len(), 1);
    assert_eq!(pass.patch.target_texts[0].index, 2);
    assert_eq!(pass.patch.target_texts[0].text, "6");
}

#[test]
fn input_value_is_used_without_query_parameter() {
    let mut page = snapshot("?other=9", "en");
    page.servings_inputs.push(input("3", None));
    page.scaling_targets.push(target(Some("10")));

    let pass = build_scaling_pass(&page, &ScalerConfig::default(), None);

    assert_eq!(
        pass.outcome.resolution.desired_source,
        ServingsSource::InputValue
    );
    assert_eq!(pass.patch.target_texts[0].text, "30");
}

#[test]
fn only_first_servings_input_is_consulted() {
    let mut page = snapshot("", "en");
    page.servings_inputs.push(input("", Some("2")));
    page.servings_inputs.push(input("6", Some("12")));
    page.scaling_targets.push(target(Some("10")));

    let pass = build_scaling_pass(&page, &ScalerConfig::default(), None);

    assert_eq!(pass.outcome.resolution.desired, 1.0);
    assert_eq!(pass.outcome.resolution.base, 2.0);
    assert_eq!(pass.patch.target_texts[0].text, "5");
    assert_eq!(pass.patch.servings_inputs, vec![0, 1]);
}

#[test]
fn non_input_first_element_contributes_base_but_no_value() {
    let mut page = snapshot("", "en");
    page.servings_inputs.push(ServingsInputState {
        value: None,
        base: Some("4".to_owned()),
        is_input_control: false,
    });
    page.servings_inputs.push(input("8", None));
    page.scaling_targets.push(target(Some("100")));

    let pass = build_scaling_pass(&page, &ScalerConfig::default(), None);

    assert_eq!(pass.outcome.resolution.desired_source, ServingsSource::Default);
    assert_eq!(pass.patch.target_texts[0].text, "25");
    assert_eq!(pass.patch.servings_inputs, vec![1]);
}

#[test]
fn select_first_element_supplies_value_but_is_not_written() {
    let mut page = snapshot("", "en");
    page.servings_inputs.push(ServingsInputState {
        value: Some("6".to_owned()),
        base: Some("2".to_owned()),
        is_input_control: false,
    });
    page.servings_inputs.push(input("2", None));
    page.scaling_targets.push(target(Some("10")));

    let pass = build_scaling_pass(&page, &ScalerConfig::default(), None);

    assert_eq!(pass.outcome.resolution.desired_source, ServingsSource::InputValue);
    assert_eq!(pass.outcome.resolution.desired, 6.0);
    assert_eq!(pass.patch.target_texts[0].text, "30");
    assert_eq!(pass.patch.servings_inputs, vec![1]);
}

#[test]
fn only_input_submit_controls_are_enabled() {
    let mut page = snapshot("", "en");
    page.submit_controls.push(submit(true));
    page.submit_controls.push(submit(false));
    page.submit_controls.push(SubmitControlState {
        is_input_control: true,
        disabled: false,
    });

    let pass = build_scaling_pass(&page, &ScalerConfig::default(), None);

    assert_eq!(pass.patch.enable_submits, vec![0, 2]);
    assert_eq!(pass.outcome.enabled_submits, vec![0, 2]);
}

#[test]
fn quantities_follow_page_language() {
    let mut page = snapshot("?servings=3", "de");
    page.scaling_targets.push(target(Some("1234.5")));

    let pass = build_scaling_pass(&page, &ScalerConfig::default(), None);

    assert_eq!(pass.outcome.locale, "de");
    assert_eq!(pass.patch.target_texts[0].text, "3.703,5");
    assert_eq!(pass.outcome.servings_value, "3");
}

#[test]
fn missing_language_uses_configured_fallback() {
    let mut page = snapshot("", "");
    page.scaling_targets.push(target(Some("1234.5")));
    let config = ScalerConfig::default().with_fallback_language("fr");

    assert_eq!(texts(&page, &config), vec![(0, "1\u{202F}234,5".to_owned())]);
}

#[test]
fn negative_servings_pass_through() {
    let mut page = snapshot("?servings=-2", "en");
    page.servings_inputs.push(input("1", None));
    page.scaling_targets.push(target(Some("50")));

    let pass = build_scaling_pass(&page, &ScalerConfig::default(), None);

    assert_eq!(pass.patch.target_texts[0].text, "-100");
    assert_eq!(pass.outcome.servings_value, "-2");
}

#[test]
fn zero_base_renders_non_finite_quantities() {
    let mut page = snapshot("?servings=4", "en");
    page.servings_inputs.push(input("", Some("0")));
    page.scaling_targets.push(target(Some("50")));
    page.scaling_targets.push(target(Some("0")));

    assert_eq!(
        texts(&page, &ScalerConfig::default()),
        vec![(0, "∞".to_owned()), (1, "NaN".to_owned())]
    );
}

#[test]
fn infinite_servings_write_script_text_to_inputs() {
    let mut page = snapshot("?servings=Infinity", "en");
    page.servings_inputs.push(input("2", None));

    let pass = build_scaling_pass(&page, &ScalerConfig::default(), None);

    assert_eq!(pass.patch.servings_value_text(), "Infinity");
}

#[test]
fn fraction_digits_control_rounding() {
    let mut page = snapshot("", "en");
    page.scaling_targets.push(target(Some("1.23456")));
    let config = ScalerConfig::default().with_fraction_digits(3);

    assert_eq!(texts(&page, &config), vec![(0, "1.235".to_owned())]);
}

#[test]
fn custom_formatter_receives_rounded_quantity_and_locale() {
    let mut page = snapshot("?servings=4", "de");
    page.servings_inputs.push(input("", Some("2")));
    page.scaling_targets.push(target(Some("33.333")));
    let formatter: recipe_scaler::api::QuantityFormatterFn =
        Arc::new(|quantity: f64, locale: &NumberLocale| format!("{quantity} [{}]", locale.tag));

    let pass = build_scaling_pass(&page, &ScalerConfig::default(), Some(&formatter));

    assert_eq!(pass.patch.target_texts[0].text, "66.67 [de]");
    assert_eq!(pass.outcome.rendered_targets[0].quantity, 66.67);
}

#[test]
fn custom_query_parameter_name_is_honoured() {
    let mut page = snapshot("?servings=10&portions=3", "en");
    page.scaling_targets.push(target(Some("2")));
    let config = ScalerConfig::default().with_servings_parameter("portions");

    assert_eq!(texts(&page, &config), vec![(0, "6".to_owned())]);
}

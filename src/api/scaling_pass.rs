use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::number::serde_js_float;
use crate::core::{
    NumberLocale, QueryString, ServingsResolution, number_to_string, parse_float,
    resolve_servings, round_half_away_from_zero,
};
use crate::page::{PagePatch, PageSnapshot, ServingsInputState};

use super::ScalerConfig;
use super::quantity_formatter::{QuantityFormatterFn, format_quantity};

/// A scaling target that received new text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedTarget {
    pub index: usize,
    #[serde(with = "serde_js_float")]
    pub base: f64,
    #[serde(with = "serde_js_float")]
    pub quantity: f64,
    pub text: String,
}

/// Summary of one scaling pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingOutcome {
    pub resolution: ServingsResolution,
    /// Language declared by the page.
    pub language: String,
    /// Locale whose number symbols were used.
    pub locale: String,
    /// Text written to servings inputs.
    pub servings_value: String,
    pub rendered_targets: Vec<RenderedTarget>,
    pub skipped_targets: Vec<usize>,
    pub updated_inputs: Vec<usize>,
    pub enabled_submits: Vec<usize>,
}

/// Patch and outcome computed from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingPass {
    pub patch: PagePatch,
    pub outcome: ScalingOutcome,
}

/// Computes the writes for `snapshot` without touching any page.
#[must_use]
pub fn build_scaling_pass(
    snapshot: &PageSnapshot,
    config: &ScalerConfig,
    formatter: Option<&QuantityFormatterFn>,
) -> ScalingPass {
    let query = QueryString::parse(&snapshot.query);
    let first_input = snapshot.first_servings_input();
    let resolution = resolve_servings(
        query.get(&config.servings_parameter),
        first_input.and_then(ServingsInputState::current_value),
        first_input.and_then(|input| input.base.as_deref()),
    );
    let locale = NumberLocale::resolve(&snapshot.language, &config.fallback_language);

    let mut patch = PagePatch::new(resolution.desired);
    for (index, control) in snapshot.submit_controls.iter().enumerate() {
        if control.is_input_control {
            patch.enable_submits.push(index);
        }
    }

    let mut rendered_targets = Vec::new();
    let mut skipped_targets = Vec::new();
    for (index, target) in snapshot.scaling_targets.iter().enumerate() {
        let Some(base) = parse_float(target.base.as_deref()) else {
            trace!(index, base = ?target.base, "scaling target without usable base skipped");
            skipped_targets.push(index);
            continue;
        };
        let quantity = round_half_away_from_zero(
            resolution.scale(base),
            u32::from(config.fraction_digits),
        );
        let text = format_quantity(formatter, quantity, locale, config.fraction_digits);
        patch = patch.with_target_text(index, text.clone());
        rendered_targets.push(RenderedTarget {
            index,
            base,
            quantity,
            text,
        });
    }

    for (index, input) in snapshot.servings_inputs.iter().enumerate() {
        if input.is_input_control {
            patch.servings_inputs.push(index);
        }
    }

    debug!(
        desired = resolution.desired,
        base = resolution.base,
        factor = resolution.factor,
        locale = locale.tag,
        rendered = rendered_targets.len(),
        skipped = skipped_targets.len(),
        "built scaling pass"
    );

    let outcome = ScalingOutcome {
        resolution,
        language: snapshot.language.clone(),
        locale: locale.tag.to_owned(),
        servings_value: number_to_string(resolution.desired),
        rendered_targets,
        skipped_targets,
        updated_inputs: patch.servings_inputs.clone(),
        enabled_submits: patch.enable_submits.clone(),
    };
    ScalingPass { patch, outcome }
}

use recipe_scaler::api::{display_fraction_digits, format_quantity_with_runtime};
use recipe_scaler::core::{LanguageTag, NumberLocale};

#[test]
fn runtime_text_is_used_when_available() {
    let locale = NumberLocale::resolve("hu", "en");
    let text = format_quantity_with_runtime(
        |value, max_fraction_digits| {
            assert_eq!(max_fraction_digits, 3);
            Some(format!("runtime {value}"))
        },
        1234.5,
        locale,
        2,
    );
    assert_eq!(text, "runtime 1234.5");
}

#[test]
fn rejected_language_falls_back_to_builtin_symbols() {
    // "sw" has no built-in symbols, so the configured fallback applies.
    assert!(LanguageTag::parse("sw").and_then(|tag| NumberLocale::lookup(&tag)).is_none());
    let locale = NumberLocale::resolve("sw", "de");

    let text = format_quantity_with_runtime(|_, _| None, 1234.5, locale, 2);

    assert_eq!(locale.tag, "de");
    assert_eq!(text, "1.234,5");
}

#[test]
fn empty_language_falls_back_to_builtin_symbols() {
    let locale = NumberLocale::resolve("", "en");
    let text = format_quantity_with_runtime(|_, _| None, 66.67, locale, 2);
    assert_eq!(text, "66.67");
}

#[test]
fn wider_rounding_widens_display_precision() {
    assert_eq!(display_fraction_digits(2), 3);
    assert_eq!(display_fraction_digits(5), 5);

    let locale = NumberLocale::resolve("en", "en");
    let text = format_quantity_with_runtime(|_, _| None, 1.23456, locale, 5);
    assert_eq!(text, "1.23456");
}

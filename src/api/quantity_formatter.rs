use std::sync::Arc;

use tracing::trace;

use crate::core::{DEFAULT_DISPLAY_FRACTION_DIGITS, NumberLocale, format_number_with_precision};

/// Host-supplied formatter for rounded quantities.
pub type QuantityFormatterFn = Arc<dyn Fn(f64, &NumberLocale) -> String + Send + Sync + 'static>;

/// Fraction digits shown for quantities rounded to `fraction_digits`.
///
/// At least the default three, so a value rounded to more places than that is
/// not truncated a second time.
#[must_use]
pub fn display_fraction_digits(fraction_digits: u8) -> u32 {
    DEFAULT_DISPLAY_FRACTION_DIGITS.max(u32::from(fraction_digits))
}

/// Formats through a host locale facility such as `Number#toLocaleString`.
///
/// `runtime` receives the quantity and the maximum fraction digits; when it
/// returns `None` (the host rejected the language tag) the built-in symbols of
/// `locale` are used instead.
pub fn format_quantity_with_runtime<F>(
    runtime: F,
    quantity: f64,
    locale: &NumberLocale,
    fraction_digits: u8,
) -> String
where
    F: FnOnce(f64, u32) -> Option<String>,
{
    let max_fraction_digits = display_fraction_digits(fraction_digits);
    runtime(quantity, max_fraction_digits).unwrap_or_else(|| {
        trace!(locale = locale.tag, "runtime number formatting unavailable");
        format_number_with_precision(quantity, locale, max_fraction_digits)
    })
}

pub(super) fn format_quantity(
    formatter: Option<&QuantityFormatterFn>,
    quantity: f64,
    locale: &NumberLocale,
    fraction_digits: u8,
) -> String {
    match formatter {
        Some(formatter) => formatter(quantity, locale),
        None => format_number_with_precision(
            quantity,
            locale,
            display_fraction_digits(fraction_digits),
        ),
    }
}

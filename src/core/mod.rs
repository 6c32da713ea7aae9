pub mod locale;
pub mod number;
pub mod query;
pub mod rounding;
pub mod servings;

pub use locale::{
    DEFAULT_DISPLAY_FRACTION_DIGITS, LanguageTag, NumberLocale, format_number,
    format_number_with_precision,
};
pub use number::{is_js_whitespace, number_to_string, parse_float};
pub use query::QueryString;
pub use rounding::{DEFAULT_FRACTION_DIGITS, FIXED_NOTATION_LIMIT, round_half_away_from_zero};
pub use servings::{
    BaseSource, DEFAULT_BASE_SERVINGS, DEFAULT_SERVINGS, ServingsResolution, ServingsSource,
    resolve_servings,
};

//! Number parsing and printing with ECMAScript semantics.
//!
//! Page attributes and input values are authored for browsers, so a quantity
//! like `"250 g"` or `" 4"` has to read the same way `parseFloat` reads it.

/// Parses the longest leading decimal literal of `input`, like `parseFloat`.
///
/// Returns `None` where `parseFloat` returns `NaN`: for a missing input and for
/// text without a numeric prefix.
#[must_use]
pub fn parse_float(input: Option<&str>) -> Option<f64> {
    let text = input?.trim_start_matches(is_js_whitespace);
    let (sign_len, negative) = match text.as_bytes().first() {
        Some(b'+') => (1, false),
        Some(b'-') => (1, true),
        _ => (0, false),
    };

    if text[sign_len..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let literal_len = decimal_literal_len(&text.as_bytes()[sign_len..])?;
    text[..sign_len + literal_len].parse::<f64>().ok()
}

/// Length of the unsigned decimal literal at the start of `bytes`.
fn decimal_literal_len(bytes: &[u8]) -> Option<usize> {
    let integer_digits = leading_digits(bytes);
    let mut len = integer_digits;
    let mut fraction_digits = 0;

    if bytes.get(len) == Some(&b'.') {
        fraction_digits = leading_digits(&bytes[len + 1..]);
        if integer_digits > 0 || fraction_digits > 0 {
            len += 1 + fraction_digits;
        }
    }
    if integer_digits == 0 && fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let mut exponent_len = 1;
        if matches!(bytes.get(len + 1), Some(b'+' | b'-')) {
            exponent_len += 1;
        }
        let exponent_digits = leading_digits(&bytes[(len + exponent_len).min(bytes.len())..]);
        if exponent_digits > 0 {
            len += exponent_len + exponent_digits;
        }
    }

    Some(len)
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// White space and line terminators skipped by `parseFloat`.
#[must_use]
pub fn is_js_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Prints `value` the way `Number#toString` does.
///
/// This is the text an input control shows after a number is assigned to its
/// `value`, which is never locale formatted.
#[must_use]
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Serde adapter for floats that may be non-finite.
///
/// JSON has no NaN or infinity, so those are written as their
/// `Number#toString` text and read back through [`parse_float`].
pub mod serde_js_float {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{number_to_string, parse_float};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&number_to_string(*value))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => Ok(parse_float(Some(&text)).unwrap_or(f64::NAN)),
        }
    }
}

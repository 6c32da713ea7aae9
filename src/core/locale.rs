use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rounding::{FIXED_NOTATION_LIMIT, round_to_decimal};

/// Fraction digits kept by default number display, as in `toLocaleString()`.
pub const DEFAULT_DISPLAY_FRACTION_DIGITS: u32 = 3;

const PRIMARY_GROUP_SIZE: usize = 3;

/// Language and optional region of a BCP 47 language tag.
///
/// Script, variant and extension subtags are accepted but ignored; number
/// symbols only depend on language and region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageTag {
    language: String,
    region: Option<String>,
}

impl LanguageTag {
    /// Parses tags such as `de`, `de-CH`, `zh-Hant-TW` or `pt_BR`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut subtags = input.trim().split(['-', '_']);
        let language = subtags.next()?;
        if !matches!(language.len(), 2 | 3 | 5..=8)
            || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return None;
        }

        let mut region = None;
        for subtag in subtags {
            if subtag.is_empty()
                || subtag.len() > 8
                || !subtag.bytes().all(|b| b.is_ascii_alphanumeric())
            {
                return None;
            }
            let is_region = (subtag.len() == 2 && subtag.bytes().all(|b| b.is_ascii_alphabetic()))
                || (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit()));
            if region.is_none() && is_region {
                region = Some(subtag.to_ascii_uppercase());
            }
        }

        Some(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{region}", self.language),
            None => f.write_str(&self.language),
        }
    }
}

/// Number symbols of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub tag: &'static str,
    pub decimal_separator: char,
    pub group_separator: char,
    pub minus_sign: char,
    /// Integer digits needed beyond the first group before grouping applies.
    pub minimum_grouping_digits: u8,
    /// Size of the groups left of the first one, when it differs from three.
    pub secondary_group_size: Option<u8>,
}

const fn locale(
    tag: &'static str,
    decimal_separator: char,
    group_separator: char,
    minus_sign: char,
    minimum_grouping_digits: u8,
) -> NumberLocale {
    NumberLocale {
        tag,
        decimal_separator,
        group_separator,
        minus_sign,
        minimum_grouping_digits,
        secondary_group_size: None,
    }
}

const fn indian(tag: &'static str) -> NumberLocale {
    NumberLocale {
        secondary_group_size: Some(2),
        ..locale(tag, '.', ',', '-', 1)
    }
}

const NBSP: char = '\u{00A0}';
const NARROW_NBSP: char = '\u{202F}';
const APOSTROPHE: char = '\u{2019}';
const MINUS: char = '\u{2212}';

pub const EN: NumberLocale = locale("en", '.', ',', '-', 1);

const LOCALES: &[NumberLocale] = &[
    EN,
    indian("en-IN"),
    indian("hi"),
    locale("de", ',', '.', '-', 1),
    locale("de-AT", ',', NBSP, '-', 1),
    locale("de-CH", '.', APOSTROPHE, '-', 1),
    locale("fr", ',', NARROW_NBSP, '-', 1),
    locale("es", ',', '.', '-', 2),
    locale("it", ',', '.', '-', 1),
    locale("it-CH", '.', APOSTROPHE, '-', 1),
    locale("pt", ',', '.', '-', 1),
    locale("pt-PT", ',', NBSP, '-', 2),
    locale("nl", ',', '.', '-', 1),
    locale("sv", ',', NBSP, MINUS, 1),
    locale("nb", ',', NBSP, MINUS, 1),
    locale("nn", ',', NBSP, MINUS, 1),
    locale("no", ',', NBSP, MINUS, 1),
    locale("da", ',', '.', '-', 1),
    locale("fi", ',', NBSP, MINUS, 1),
    locale("pl", ',', NBSP, '-', 2),
    locale("cs", ',', NBSP, '-', 1),
    locale("ru", ',', NBSP, '-', 1),
    locale("uk", ',', NBSP, '-', 1),
    locale("hu", ',', NBSP, '-', 2),
    locale("ro", ',', '.', '-', 1),
    locale("el", ',', '.', '-', 1),
    locale("id", ',', '.', '-', 1),
    locale("tr", ',', '.', '-', 1),
    locale("ja", '.', ',', '-', 1),
    locale("zh", '.', ',', '-', 1),
    locale("ko", '.', ',', '-', 1),
];

impl NumberLocale {
    /// Finds the symbols for `tag`: `language-region` first, then `language`.
    #[must_use]
    pub fn lookup(tag: &LanguageTag) -> Option<&'static NumberLocale> {
        let find = |key: &str| {
            LOCALES
                .iter()
                .find(|locale| locale.tag.eq_ignore_ascii_case(key))
        };

        tag.region()
            .and_then(|region| find(&format!("{}-{region}", tag.language())))
            .or_else(|| find(tag.language()))
    }

    /// Resolves the page language, falling back to `fallback_language` and
    /// finally to English when neither is known.
    #[must_use]
    pub fn resolve(language: &str, fallback_language: &str) -> &'static NumberLocale {
        let known = |input: &str| LanguageTag::parse(input).and_then(|tag| Self::lookup(&tag));
        known(language)
            .or_else(|| known(fallback_language))
            .unwrap_or(&EN)
    }

    /// Tags with built-in symbols.
    pub fn supported_tags() -> impl Iterator<Item = &'static str> {
        LOCALES.iter().map(|locale| locale.tag)
    }
}

/// Formats `value` like `value.toLocaleString(tag)` with default options.
#[must_use]
pub fn format_number(value: f64, locale: &NumberLocale) -> String {
    format_number_with_precision(value, locale, DEFAULT_DISPLAY_FRACTION_DIGITS)
}

/// Formats `value` with at most `max_fraction_digits` decimals and no
/// trailing zeros.
#[must_use]
pub fn format_number_with_precision(
    value: f64,
    locale: &NumberLocale,
    max_fraction_digits: u32,
) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }

    let mut text = String::new();
    if value.is_sign_negative() {
        text.push(locale.minus_sign);
    }
    if value.is_infinite() {
        text.push('∞');
        return text;
    }

    let digits = plain_digits(value.abs(), max_fraction_digits);
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    push_grouped_integer(&mut text, integer, locale);
    if !fraction.is_empty() {
        text.push(locale.decimal_separator);
        text.push_str(fraction);
    }
    text
}

fn plain_digits(magnitude: f64, max_fraction_digits: u32) -> String {
    if magnitude < FIXED_NOTATION_LIMIT {
        if let Some(rounded) = round_to_decimal(magnitude, max_fraction_digits) {
            return rounded.normalize().to_string();
        }
    }
    // Shortest round-trip digits; no fraction remains at this magnitude.
    format!("{magnitude}")
}

fn push_grouped_integer(text: &mut String, integer: &str, locale: &NumberLocale) {
    let min_len = PRIMARY_GROUP_SIZE + usize::from(locale.minimum_grouping_digits);
    if integer.len() < min_len {
        text.push_str(integer);
        return;
    }

    let secondary = locale
        .secondary_group_size
        .map_or(PRIMARY_GROUP_SIZE, usize::from);
    let mut groups: SmallVec<[&str; 8]> = SmallVec::new();
    let (mut rest, last) = integer.split_at(integer.len() - PRIMARY_GROUP_SIZE);
    groups.push(last);
    while rest.len() > secondary {
        let (head, group) = rest.split_at(rest.len() - secondary);
        groups.push(group);
        rest = head;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }

    for (position, group) in groups.iter().rev().enumerate() {
        if position > 0 {
            text.push(locale.group_separator);
        }
        text.push_str(group);
    }
}

#[cfg(test)]
mod tests {
    use super::{EN, push_grouped_integer};

    #[test]
    fn short_integers_stay_ungrouped() {
        let mut text = String::new();
        push_grouped_integer(&mut text, "999", &EN);
        assert_eq!(text, "999");
    }

    #[test]
    fn long_integers_group_by_thousands() {
        let mut text = String::new();
        push_grouped_integer(&mut text, "1234567", &EN);
        assert_eq!(text, "1,234,567");
    }
}

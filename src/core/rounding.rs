use rust_decimal::{Decimal, RoundingStrategy};

/// Default precision of displayed quantities.
pub const DEFAULT_FRACTION_DIGITS: u32 = 2;

/// Magnitude from which fixed-point rounding leaves a value untouched.
///
/// Mirrors `Number#toFixed`, which falls back to plain `toString` output for
/// such values.
pub const FIXED_NOTATION_LIMIT: f64 = 1e21;

/// Rounds `value` to `fraction_digits` decimals, ties away from zero.
///
/// Rounding works on the exact binary value, so `1.005` (stored slightly below
/// the tie) rounds down to `1.0`, just like `parseFloat(x.toFixed(2))` in a
/// browser. Non-finite values and magnitudes of at least
/// [`FIXED_NOTATION_LIMIT`] are returned unchanged, and a result of zero keeps
/// the sign of the input.
#[must_use]
pub fn round_half_away_from_zero(value: f64, fraction_digits: u32) -> f64 {
    if !value.is_finite() || value.abs() >= FIXED_NOTATION_LIMIT {
        return value;
    }
    let Some(rounded) = round_to_decimal(value, fraction_digits) else {
        return value;
    };

    // Reading the decimal text back yields the nearest double.
    let result = rounded.to_string().parse::<f64>().unwrap_or(value);
    if result == 0.0 {
        0.0_f64.copysign(value)
    } else {
        result
    }
}

/// Exact decimal expansion of `value`, rounded ties away from zero.
///
/// Returns `None` when `value` does not fit a [`Decimal`].
pub(crate) fn round_to_decimal(value: f64, fraction_digits: u32) -> Option<Decimal> {
    let exact = Decimal::from_f64_retain(value)?;
    Some(exact.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero))
}

//! Normalization of caller-supplied bounds.
//!
//! The generator only accepts well-formed integers with `min <= max`. This
//! module turns raw text into such a pair: integer literals are taken as-is,
//! other finite numerals are truncated toward zero, and anything else is
//! refused.

use crate::error::InputError;

/// Parses one bound.
///
/// # Errors
///
/// Returns `InputError::NotAnInteger` for non-numeric input, non-finite
/// numerals, and values outside the `i64` range.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn parse_bound(name: &'static str, input: &str) -> Result<i64, InputError> {
    let trimmed = input.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }

    let not_an_integer = || InputError::NotAnInteger {
        name,
        input: input.to_owned(),
    };
    let value: f64 = trimmed.parse().map_err(|_| not_an_integer())?;
    if !value.is_finite() {
        return Err(not_an_integer());
    }

    // i64::MIN is exactly representable; i64::MAX rounds up to 2^63.
    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated >= -(i64::MIN as f64) {
        return Err(not_an_integer());
    }
    Ok(truncated as i64)
}

/// Checks that the bounds are ordered.
///
/// # Errors
///
/// Returns `InputError::MinExceedsMax` if `min > max`.
pub fn validate_range(min: i64, max: i64) -> Result<(i64, i64), InputError> {
    if min > max {
        return Err(InputError::MinExceedsMax { min, max });
    }
    Ok((min, max))
}

/// Parses and validates a `(min, max)` pair.
///
/// # Errors
///
/// Returns the first `InputError` encountered.
pub fn parse_range(min: &str, max: &str) -> Result<(i64, i64), InputError> {
    let min = parse_bound("min", min)?;
    let max = parse_bound("max", max)?;
    validate_range(min, max)
}

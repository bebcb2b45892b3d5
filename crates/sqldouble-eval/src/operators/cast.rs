//! Cast Operators for DOUBLE
//!
//! Implements casts from DOUBLE to VARCHAR (bounded or not), BIGINT, INTEGER,
//! SMALLINT, TINYINT, BOOLEAN and REAL; casts into DOUBLE from VARCHAR, the
//! integral types, REAL and BOOLEAN; and the saturated floor casts used when
//! rewriting range predicates.
//!
//! Narrowing casts to integral types round half away from zero and fail with
//! an overflow error rather than clamping. NaN and both infinities fail for
//! every integral width.

use crate::error::CastError;
use log::trace;
use sqldouble_types::{SqlType, format_double, parse_double};

/// `2^63` as a double; the exclusive upper bound for BIGINT casts
const BIGINT_UPPER_BOUND: f64 = i64::MAX as f64;
/// `-2^63` as a double; the inclusive lower bound for BIGINT casts
const BIGINT_LOWER_BOUND: f64 = i64::MIN as f64;

fn overflow(message: String) -> CastError {
    trace!("cast overflow: {}", message);
    CastError::overflow(message)
}

/// Round half away from zero (17.5 -> 18, -17.5 -> -18)
#[inline]
pub fn round_half_away_from_zero(value: f64) -> f64 {
    value.round()
}

// =========================================================================
// DOUBLE -> VARCHAR
// =========================================================================

/// Cast to `varchar` or `varchar(n)`.
///
/// The value is never truncated: text longer than the declared bound fails.
pub fn cast_to_varchar(value: f64, target: SqlType) -> Result<String, CastError> {
    let text = format_double(value);
    match target.max_length() {
        Some(bound) if text.chars().count() > bound as usize => {
            let message = format!("Value {} cannot be represented as {}", text, target);
            trace!("cast length exceeded: {}", message);
            Err(CastError::length_exceeded(message))
        }
        _ => Ok(text),
    }
}

// =========================================================================
// DOUBLE -> integral
// =========================================================================

/// Cast to BIGINT
///
/// Valid inputs lie in `[-2^63, 2^63)`; the check happens before rounding.
pub fn cast_to_bigint(value: f64) -> Result<i64, CastError> {
    if value.is_nan() {
        return Err(overflow("Unable to cast NaN to bigint".to_string()));
    }
    if !(BIGINT_LOWER_BOUND..BIGINT_UPPER_BOUND).contains(&value) {
        return Err(overflow(format!("Unable to cast {} to bigint", format_double(value))));
    }
    Ok(round_half_away_from_zero(value) as i64)
}

/// Cast to INTEGER
pub fn cast_to_integer(value: f64) -> Result<i32, CastError> {
    let rounded = cast_to_narrow_integral(value, SqlType::Integer)?;
    i32::try_from(rounded).map_err(|_| out_of_range(value, SqlType::Integer))
}

/// Cast to SMALLINT
pub fn cast_to_smallint(value: f64) -> Result<i16, CastError> {
    let rounded = cast_to_narrow_integral(value, SqlType::Smallint)?;
    i16::try_from(rounded).map_err(|_| out_of_range(value, SqlType::Smallint))
}

/// Cast to TINYINT
pub fn cast_to_tinyint(value: f64) -> Result<i8, CastError> {
    let rounded = cast_to_narrow_integral(value, SqlType::Tinyint)?;
    i8::try_from(rounded).map_err(|_| out_of_range(value, SqlType::Tinyint))
}

fn out_of_range(value: f64, target: SqlType) -> CastError {
    overflow(format!("Out of range for {}: {}", target, format_double(value)))
}

/// Round, then range-check against a type narrower than BIGINT.
fn cast_to_narrow_integral(value: f64, target: SqlType) -> Result<i64, CastError> {
    if value.is_nan() {
        return Err(overflow(format!("Unable to cast NaN to {}", target)));
    }
    let Some((min, max)) = target.integral_range() else {
        return Err(overflow(format!("Unable to cast {} to {}", format_double(value), target)));
    };
    let rounded = round_half_away_from_zero(value);
    if !rounded.is_finite() || rounded < min as f64 || rounded > max as f64 {
        return Err(out_of_range(value, target));
    }
    Ok(rounded as i64)
}

// =========================================================================
// DOUBLE -> BOOLEAN / REAL
// =========================================================================

/// Cast to BOOLEAN: true unless the value equals zero (NaN casts to true)
#[inline]
pub fn cast_to_boolean(value: f64) -> bool {
    value != 0.0
}

/// Cast to REAL with IEEE-754 rounding; overflow becomes infinity
#[inline]
pub fn cast_to_real(value: f64) -> f32 {
    value as f32
}

// =========================================================================
// -> DOUBLE
// =========================================================================

/// Cast VARCHAR to DOUBLE
pub fn cast_from_varchar(text: &str) -> Result<f64, CastError> {
    parse_double(text).map_err(|_| {
        let message = format!("Cannot cast '{}' to DOUBLE", text);
        trace!("cast malformed text: {}", message);
        CastError::malformed_text(message)
    })
}

/// Cast BIGINT to DOUBLE, rounding to nearest
#[inline]
pub fn cast_from_bigint(value: i64) -> f64 {
    value as f64
}

/// Cast INTEGER to DOUBLE
#[inline]
pub fn cast_from_integer(value: i32) -> f64 {
    f64::from(value)
}

/// Cast SMALLINT to DOUBLE
#[inline]
pub fn cast_from_smallint(value: i16) -> f64 {
    f64::from(value)
}

/// Cast TINYINT to DOUBLE
#[inline]
pub fn cast_from_tinyint(value: i8) -> f64 {
    f64::from(value)
}

/// Cast REAL to DOUBLE (exact)
#[inline]
pub fn cast_from_real(value: f32) -> f64 {
    f64::from(value)
}

/// Cast BOOLEAN to DOUBLE
#[inline]
pub fn cast_from_boolean(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

// =========================================================================
// Saturated floor casts
// =========================================================================

/// Greatest BIGINT `<=` value, clamped to the BIGINT range
pub fn saturated_floor_cast_to_bigint(value: f64) -> Result<i64, CastError> {
    saturated_floor_to_integral(value, SqlType::Bigint)
}

/// Greatest INTEGER `<=` value, clamped to the INTEGER range
pub fn saturated_floor_cast_to_integer(value: f64) -> Result<i32, CastError> {
    let floor = saturated_floor_to_integral(value, SqlType::Integer)?;
    i32::try_from(floor).map_err(|_| out_of_range(value, SqlType::Integer))
}

/// Greatest SMALLINT `<=` value, clamped to the SMALLINT range
pub fn saturated_floor_cast_to_smallint(value: f64) -> Result<i16, CastError> {
    let floor = saturated_floor_to_integral(value, SqlType::Smallint)?;
    i16::try_from(floor).map_err(|_| out_of_range(value, SqlType::Smallint))
}

/// Greatest TINYINT `<=` value, clamped to the TINYINT range
pub fn saturated_floor_cast_to_tinyint(value: f64) -> Result<i8, CastError> {
    let floor = saturated_floor_to_integral(value, SqlType::Tinyint)?;
    i8::try_from(floor).map_err(|_| out_of_range(value, SqlType::Tinyint))
}

fn saturated_floor_to_integral(value: f64, target: SqlType) -> Result<i64, CastError> {
    if value.is_nan() {
        return Err(overflow(format!("Unable to cast NaN to {}", target)));
    }
    let Some((min, max)) = target.integral_range() else {
        return Err(overflow(format!("Unable to cast {} to {}", format_double(value), target)));
    };
    if value <= min as f64 {
        return Ok(min);
    }
    // max + 1 is a power of two, so it is exact as a double
    if value + 1.0 >= max as f64 + 1.0 {
        return Ok(max);
    }
    Ok(value.floor() as i64)
}

/// Greatest REAL `<=` value, clamped to `[-f32::MAX, f32::MAX]`
pub fn saturated_floor_cast_to_real(value: f64) -> Result<f32, CastError> {
    if value.is_nan() {
        return Err(overflow("Unable to cast NaN to real".to_string()));
    }
    let max = f64::from(f32::MAX);
    if value <= -max {
        return Ok(-f32::MAX);
    }
    if value >= max {
        return Ok(f32::MAX);
    }
    let narrowed = value as f32;
    if f64::from(narrowed) > value {
        return Ok(next_down(narrowed));
    }
    Ok(narrowed)
}

/// Largest finite f32 strictly below `value`
fn next_down(value: f32) -> f32 {
    if value == 0.0 {
        return -f32::from_bits(1);
    }
    let bits = value.to_bits();
    if value > 0.0 {
        f32::from_bits(bits - 1)
    } else {
        f32::from_bits(bits + 1)
    }
}

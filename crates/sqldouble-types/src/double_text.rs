//! Text form of DOUBLE and REAL values
//!
//! Values render with the shortest digit string that reads back as the same
//! value (digits come from `ryu`), laid out the way SQL engines print floats:
//!
//! - `NaN`, `Infinity`, `-Infinity`, `0.0`, `-0.0`
//! - plain notation when `1e-3 <= |v| < 1e7`: `1200.0`, `37.7`, `0.001`
//! - scientific notation otherwise: `1.23456789E7`, `1.0E-4`
//!
//! Both notations always carry at least one fractional digit.

use std::iter::repeat_n;
use thiserror::Error;

/// Error returned when text is not a valid DOUBLE literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid DOUBLE literal: '{text}'")]
pub struct ParseDoubleError {
    pub text: String,
}

/// Render a DOUBLE value
pub fn format_double(value: f64) -> String {
    let special = special_text(
        value.is_nan(),
        value.is_infinite(),
        value == 0.0,
        value.is_sign_negative(),
    );
    if let Some(special) = special {
        return special.to_string();
    }
    let mut buffer = ryu::Buffer::new();
    layout_shortest(buffer.format_finite(value))
}

/// Render a REAL value
pub fn format_real(value: f32) -> String {
    let special = special_text(
        value.is_nan(),
        value.is_infinite(),
        value == 0.0,
        value.is_sign_negative(),
    );
    if let Some(special) = special {
        return special.to_string();
    }
    let mut buffer = ryu::Buffer::new();
    layout_shortest(buffer.format_finite(value))
}

fn special_text(nan: bool, infinite: bool, zero: bool, negative: bool) -> Option<&'static str> {
    match (nan, infinite, zero, negative) {
        (true, ..) => Some("NaN"),
        (_, true, _, false) => Some("Infinity"),
        (_, true, _, true) => Some("-Infinity"),
        (_, _, true, false) => Some("0.0"),
        (_, _, true, true) => Some("-0.0"),
        _ => None,
    }
}

/// Re-lay a finite, non-zero `ryu` rendering.
fn layout_shortest(repr: &str) -> String {
    let (negative, unsigned) = match repr.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, repr),
    };
    let (digits, exponent) = decimal_digits(unsigned);

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }

    if (-3..7).contains(&exponent) {
        if exponent >= 0 {
            let integer_len = exponent as usize + 1;
            if digits.len() <= integer_len {
                out.push_str(&digits);
                out.extend(repeat_n('0', integer_len - digits.len()));
                out.push_str(".0");
            } else {
                out.push_str(&digits[..integer_len]);
                out.push('.');
                out.push_str(&digits[integer_len..]);
            }
        } else {
            out.push_str("0.");
            out.extend(repeat_n('0', (-exponent - 1) as usize));
            out.push_str(&digits);
        }
    } else {
        out.push_str(&digits[..1]);
        out.push('.');
        if digits.len() > 1 {
            out.push_str(&digits[1..]);
        } else {
            out.push('0');
        }
        out.push('E');
        out.push_str(&exponent.to_string());
    }
    out
}

/// Split an unsigned decimal rendering into significant digits `d1 d2 ...`
/// and the exponent `e` such that the value is `d1.d2... * 10^e`.
fn decimal_digits(unsigned: &str) -> (String, i32) {
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or_default()),
        None => (unsigned, 0),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let all: String = integer.chars().chain(fraction.chars()).collect();
    let significant = all.trim_start_matches('0');
    let point = integer.len() as i32 - (all.len() - significant.len()) as i32;
    let digits = significant.trim_end_matches('0');

    (digits.to_string(), point - 1 + exponent)
}

/// Parse a DOUBLE literal.
///
/// Accepts surrounding space and ASCII control characters, an optional sign, the case-insensitive
/// tokens `NaN` and `Infinity`, and decimal or scientific numbers.
pub fn parse_double(text: &str) -> Result<f64, ParseDoubleError> {
    let error = || ParseDoubleError { text: text.to_string() };

    // Only characters up to U+0020 are trimmed; Unicode spaces stay and fail
    let trimmed = text.trim_matches(|c: char| c <= ' ');
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if unsigned.eq_ignore_ascii_case("nan") {
        return Ok(f64::NAN);
    }
    if unsigned.eq_ignore_ascii_case("infinity") {
        return Ok(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }
    if !is_decimal_literal(unsigned) {
        return Err(error());
    }

    let magnitude: f64 = unsigned.parse().map_err(|_| error())?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// `digits [. digits] [e [sign] digits]` with at least one mantissa digit
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    let mut mantissa_digits = 0;

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exponent_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exponent_start {
            return false;
        }
    }
    i == bytes.len()
}

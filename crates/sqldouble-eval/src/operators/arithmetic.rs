//! Arithmetic Operators for DOUBLE
//!
//! Implements: Add, Subtract, Multiply, Divide, Modulus, Negate
//!
//! These are the native IEEE-754 operations. They never fail: NaN operands
//! propagate, division by zero yields a signed infinity and overflow yields
//! infinity. NaN payloads are passed through untouched.

/// Add (+)
#[inline]
pub fn add(left: f64, right: f64) -> f64 {
    left + right
}

/// Subtract (-)
#[inline]
pub fn subtract(left: f64, right: f64) -> f64 {
    left - right
}

/// Multiply (*)
#[inline]
pub fn multiply(left: f64, right: f64) -> f64 {
    left * right
}

/// Divide (/)
#[inline]
pub fn divide(left: f64, right: f64) -> f64 {
    left / right
}

/// Modulus (%), truncated: the result takes the sign of the dividend
#[inline]
pub fn modulus(left: f64, right: f64) -> f64 {
    left % right
}

/// Negate (unary -)
#[inline]
pub fn negate(value: f64) -> f64 {
    -value
}

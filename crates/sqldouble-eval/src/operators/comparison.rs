//! Comparison Operators for DOUBLE
//!
//! Implements: Equal, NotEqual, LessThan, LessThanOrEqual, GreaterThan,
//! GreaterThanOrEqual, Between, and the ordering comparisons used for sorting.
//!
//! The predicates follow IEEE-754: any comparison involving NaN is false,
//! except NotEqual which is true. `+0.0` and `-0.0` compare equal.

use std::cmp::Ordering;

/// Equal (=)
#[inline]
pub fn equal(left: f64, right: f64) -> bool {
    left == right
}

/// NotEqual (<>)
#[inline]
pub fn not_equal(left: f64, right: f64) -> bool {
    left != right
}

/// LessThan (<)
#[inline]
pub fn less_than(left: f64, right: f64) -> bool {
    left < right
}

/// LessThanOrEqual (<=)
#[inline]
pub fn less_than_or_equal(left: f64, right: f64) -> bool {
    left <= right
}

/// GreaterThan (>)
#[inline]
pub fn greater_than(left: f64, right: f64) -> bool {
    left > right
}

/// GreaterThanOrEqual (>=)
#[inline]
pub fn greater_than_or_equal(left: f64, right: f64) -> bool {
    left >= right
}

/// `value BETWEEN low AND high`
///
/// Defined as `low <= value AND value <= high`, so NaN anywhere yields false.
/// NaN is not treated as equal to NaN here, unlike `is_distinct_from`.
#[inline]
pub fn between(value: f64, low: f64, high: f64) -> bool {
    less_than_or_equal(low, value) && less_than_or_equal(value, high)
}

/// Total order for sorting with NaN after every other value.
///
/// NaN equals NaN and `-0.0` equals `+0.0`, matching distinctness.
pub fn compare_unordered_last(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
    }
}

/// Total order for sorting with NaN before every other value.
pub fn compare_unordered_first(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
    }
}

/// Map an ordering to the -1/0/1 convention used by sort operators
pub(crate) fn ordering_to_long(ordering: Ordering) -> i64 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

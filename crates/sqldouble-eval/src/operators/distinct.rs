//! Distinctness Operators for DOUBLE
//!
//! Implements: IsDistinctFrom, Indeterminate
//!
//! Both understand null natively (`None`). Distinctness treats NaN as equal to
//! NaN and `-0.0` as equal to `+0.0`; it agrees with `canonicalize`, so values
//! that are not distinct always hash identically.

/// `left IS DISTINCT FROM right`
pub fn is_distinct_from(left: Option<f64>, right: Option<f64>) -> bool {
    match (left, right) {
        (None, None) => false,
        (None, Some(_)) | (Some(_), None) => true,
        (Some(left), Some(right)) => {
            if left.is_nan() && right.is_nan() {
                false
            } else {
                left != right
            }
        }
    }
}

/// Indeterminate: true only for null. NaN is a determinate value.
#[inline]
pub fn is_indeterminate(value: Option<f64>) -> bool {
    value.is_none()
}

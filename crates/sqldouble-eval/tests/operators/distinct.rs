//! Distinctness Operator Tests
//!
//! Tests for: IsDistinctFrom, Indeterminate

use super::{d, eval, odd_nan};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use sqldouble_eval::operators::{is_distinct_from, is_indeterminate};
use sqldouble_eval::{OperatorKind, canonicalize, hash_code, xx_hash_64};
use sqldouble_types::SqlValue;

#[rstest]
#[case(None, None, false)]
#[case(Some(37.7), Some(37.7), false)]
#[case(Some(37.0), Some(37.8), true)]
#[case(None, Some(37.7), true)]
#[case(Some(37.7), None, true)]
#[case(Some(f64::NAN), Some(f64::NAN), false)]
#[case(Some(f64::NAN), Some(-f64::NAN), false)]
#[case(Some(0.0), Some(-0.0), false)]
#[case(Some(f64::INFINITY), Some(f64::NEG_INFINITY), true)]
fn test_is_distinct_from(
    #[case] left: Option<f64>,
    #[case] right: Option<f64>,
    #[case] expected: bool,
) {
    assert_eq!(is_distinct_from(left, right), expected);
}

#[rstest]
#[case(None, true)]
#[case(Some(1.2), false)]
#[case(Some(1.0), false)]
#[case(Some(f64::NAN), false)]
fn test_indeterminate(#[case] value: Option<f64>, #[case] expected: bool) {
    assert_eq!(is_indeterminate(value), expected);
}

#[test]
fn test_null_aware_through_registry() {
    assert_eq!(
        eval(OperatorKind::IsDistinctFrom, &[SqlValue::Null, SqlValue::Null]).unwrap(),
        SqlValue::Boolean(false)
    );
    assert_eq!(
        eval(OperatorKind::IsDistinctFrom, &[SqlValue::Null, d(37.7)]).unwrap(),
        SqlValue::Boolean(true)
    );
    assert_eq!(
        eval(OperatorKind::IsDistinctFrom, &[d(f64::NAN), d(odd_nan())]).unwrap(),
        SqlValue::Boolean(false)
    );
    assert_eq!(
        eval(OperatorKind::Indeterminate, &[SqlValue::Null]).unwrap(),
        SqlValue::Boolean(true)
    );
    assert_eq!(
        eval(OperatorKind::Indeterminate, &[d(f64::NAN)]).unwrap(),
        SqlValue::Boolean(false)
    );
}

fn any_double() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>(),
        Just(0.0),
        Just(-0.0),
        Just(f64::NAN),
        any::<u64>().prop_map(|payload| f64::from_bits(0x7ff8_0000_0000_0000 | payload)),
    ]
}

proptest! {
    #[test]
    fn not_distinct_implies_equal_hashes(a in any_double(), b in any_double()) {
        if !is_distinct_from(Some(a), Some(b)) {
            prop_assert_eq!(canonicalize(a), canonicalize(b));
            prop_assert_eq!(hash_code(a), hash_code(b));
            prop_assert_eq!(xx_hash_64(a), xx_hash_64(b));
        }
    }

    #[test]
    fn distinctness_is_reflexive_and_symmetric(a in any_double(), b in any_double()) {
        prop_assert!(!is_distinct_from(Some(a), Some(a)));
        prop_assert_eq!(is_distinct_from(Some(a), Some(b)), is_distinct_from(Some(b), Some(a)));
    }
}

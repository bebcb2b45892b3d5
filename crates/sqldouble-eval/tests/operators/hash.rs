//! Hash Operator Tests
//!
//! Tests for: HashCode, XxHash64

use super::{d, eval, registry};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sqldouble_eval::{EvalError, NullConvention, OperatorKind, hash_code, xx_hash_64};
use sqldouble_types::{SqlType, SqlValue};

const NAN_REPRESENTATIONS: [u64; 4] = [
    0x7ff8_0000_0000_0000,
    0xfff8_0000_0000_0000,
    0x7ff8_1234_1234_1234,
    0xfff8_1234_1234_1234,
];

#[test]
fn test_nan_hash() {
    let reference = f64::from_bits(NAN_REPRESENTATIONS[0]);
    for bits in NAN_REPRESENTATIONS {
        let nan = f64::from_bits(bits);
        assert!(nan.is_nan());
        // Raw bits survive the round-trip
        assert_eq!(nan.to_bits(), bits);
        assert_eq!(hash_code(nan), hash_code(reference));
        assert_eq!(xx_hash_64(nan), xx_hash_64(reference));
    }
}

#[test]
fn test_zero_hash() {
    for zero in [0.0, -0.0] {
        assert!(zero == 0.0);
        assert_eq!(hash_code(zero), hash_code(0.0));
        assert_eq!(xx_hash_64(zero), xx_hash_64(0.0));
    }
}

#[test]
fn test_hash_through_registry_matches_functions() {
    for value in [37.7, -0.0, f64::NAN, f64::INFINITY] {
        assert_eq!(
            eval(OperatorKind::HashCode, &[d(value)]).unwrap(),
            SqlValue::Bigint(hash_code(value) as i64)
        );
        assert_eq!(
            eval(OperatorKind::XxHash64, &[d(value)]).unwrap(),
            SqlValue::Bigint(xx_hash_64(value) as i64)
        );
    }
}

#[test]
fn test_hash_of_null() {
    assert_eq!(eval(OperatorKind::HashCode, &[SqlValue::Null]).unwrap(), SqlValue::Null);
    let err = registry()
        .invoke(
            SqlType::Double,
            OperatorKind::XxHash64,
            NullConvention::NeverNull,
            &[SqlValue::Null],
        )
        .unwrap_err();
    assert!(matches!(err, EvalError::NullArgument { .. }));
}

proptest! {
    #[test]
    fn hash_is_deterministic(value in any::<f64>()) {
        prop_assert_eq!(hash_code(value), hash_code(value));
        prop_assert_eq!(xx_hash_64(value), xx_hash_64(value));
    }

    #[test]
    fn any_nan_payload_hashes_like_canonical_nan(
        payload in 1u64..(1u64 << 52),
        negative in any::<bool>(),
    ) {
        let sign = if negative { 1u64 << 63 } else { 0 };
        let nan = f64::from_bits(sign | 0x7ff0_0000_0000_0000 | payload);
        prop_assert!(nan.is_nan());
        prop_assert_eq!(hash_code(nan), hash_code(f64::NAN));
        prop_assert_eq!(xx_hash_64(nan), xx_hash_64(f64::NAN));
    }
}

//! Cast Operator Tests
//!
//! Tests for: casts to VARCHAR, BIGINT, INTEGER, SMALLINT, TINYINT, BOOLEAN,
//! REAL; casts into DOUBLE; saturated floor casts

use super::{d, registry};
use pretty_assertions::assert_eq;
use rstest::rstest;
use sqldouble_eval::operators::{
    cast_from_bigint, cast_from_boolean, cast_from_real, cast_from_varchar, cast_to_bigint,
    cast_to_boolean, cast_to_integer, cast_to_real, cast_to_smallint, cast_to_tinyint,
    cast_to_varchar, saturated_floor_cast_to_bigint, saturated_floor_cast_to_smallint,
};
use sqldouble_eval::{CastErrorKind, EvalError, NullConvention, OperatorKind};
use sqldouble_types::{SqlType, SqlValue};

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

fn next_up(value: f64) -> f64 {
    if value >= 0.0 {
        f64::from_bits(value.to_bits() + 1)
    } else {
        f64::from_bits(value.to_bits() - 1)
    }
}

fn next_down(value: f64) -> f64 {
    -next_up(-value)
}

// ============================================================================
// DOUBLE -> VARCHAR
// ============================================================================

#[rstest]
#[case(37.7, SqlType::VARCHAR, "37.7")]
#[case(17.1, SqlType::VARCHAR, "17.1")]
#[case(f64::NAN, SqlType::VARCHAR, "NaN")]
#[case(1200.0, SqlType::varchar(6), "1200.0")]
#[case(1200.0, SqlType::varchar(50), "1200.0")]
#[case(12345678.9, SqlType::varchar(50), "1.23456789E7")]
#[case(f64::NAN, SqlType::varchar(3), "NaN")]
#[case(f64::INFINITY, SqlType::varchar(50), "Infinity")]
#[case(-0.0, SqlType::VARCHAR, "-0.0")]
fn test_cast_to_varchar(#[case] value: f64, #[case] target: SqlType, #[case] expected: &str) {
    assert_eq!(cast_to_varchar(value, target).unwrap(), expected);
}

#[rstest]
#[case(1200.0, 5, "Value 1200.0 cannot be represented as varchar(5)")]
#[case(1200.0, 4, "Value 1200.0 cannot be represented as varchar(4)")]
#[case(0.0, 2, "Value 0.0 cannot be represented as varchar(2)")]
#[case(-0.0, 3, "Value -0.0 cannot be represented as varchar(3)")]
#[case(f64::NAN, 2, "Value NaN cannot be represented as varchar(2)")]
#[case(f64::INFINITY, 7, "Value Infinity cannot be represented as varchar(7)")]
fn test_cast_to_varchar_length_exceeded(
    #[case] value: f64,
    #[case] length: u32,
    #[case] message: &str,
) {
    let err = cast_to_varchar(value, SqlType::varchar(length)).unwrap_err();
    assert_eq!(err.kind, CastErrorKind::LengthExceeded);
    assert_eq!(err.message, message);
}

#[test]
fn test_bounded_varchar_through_registry() {
    let registry = registry();
    let cast = |length| {
        registry.invoke(
            SqlType::Double,
            OperatorKind::Cast { target: SqlType::varchar(length) },
            NullConvention::NeverNull,
            &[d(1200.0)],
        )
    };
    assert_eq!(cast(6).unwrap(), SqlValue::varchar("1200.0"));
    let err = cast(5).unwrap_err();
    assert_eq!(err.cast_kind(), Some(CastErrorKind::LengthExceeded));
    assert_eq!(err.to_string(), "Value 1200.0 cannot be represented as varchar(5)");
}

// ============================================================================
// DOUBLE -> BIGINT
// ============================================================================

#[rstest]
#[case(37.7, 38)]
#[case(-37.7, -38)]
#[case(17.1, 17)]
#[case(-17.1, -17)]
#[case(9.2e18, 9_200_000_000_000_000_000)]
#[case(-9.2e18, -9_200_000_000_000_000_000)]
#[case(2.21e9, 2_210_000_000)]
#[case(-2.21e9, -2_210_000_000)]
#[case(17.5, 18)]
#[case(-17.5, -18)]
fn test_cast_to_bigint(#[case] value: f64, #[case] expected: i64) {
    assert_eq!(cast_to_bigint(value).unwrap(), expected);
}

#[test]
fn test_cast_to_bigint_boundaries() {
    let below_max = next_down(TWO_POW_63);
    assert_eq!(cast_to_bigint(below_max).unwrap(), below_max as i64);
    assert!(cast_to_bigint(TWO_POW_63).is_err());
    assert!(cast_to_bigint(next_up(TWO_POW_63)).is_err());

    assert_eq!(cast_to_bigint(-TWO_POW_63).unwrap(), i64::MIN);
    let above_min = next_up(-TWO_POW_63);
    assert_eq!(cast_to_bigint(above_min).unwrap(), above_min as i64);
    assert!(cast_to_bigint(next_down(-TWO_POW_63)).is_err());
}

#[rstest]
#[case(9.3e18, "Unable to cast 9.3E18 to bigint")]
#[case(-9.3e18, "Unable to cast -9.3E18 to bigint")]
#[case(f64::INFINITY, "Unable to cast Infinity to bigint")]
#[case(f64::NEG_INFINITY, "Unable to cast -Infinity to bigint")]
#[case(f64::NAN, "Unable to cast NaN to bigint")]
fn test_cast_to_bigint_out_of_range(#[case] value: f64, #[case] message: &str) {
    let err = cast_to_bigint(value).unwrap_err();
    assert_eq!(err.kind, CastErrorKind::Overflow);
    assert_eq!(err.message, message);
}

// ============================================================================
// DOUBLE -> narrow integral
// ============================================================================

#[test]
fn test_cast_to_narrow_integral() {
    assert_eq!(cast_to_integer(37.7).unwrap(), 38);
    assert_eq!(cast_to_integer(-2_147_483_648.0).unwrap(), i32::MIN);
    assert_eq!(cast_to_smallint(-17.5).unwrap(), -18);
    assert_eq!(cast_to_smallint(32_767.0).unwrap(), i16::MAX);
    assert_eq!(cast_to_tinyint(127.4).unwrap(), 127);
    assert!(cast_to_tinyint(127.5).is_err());
    assert!(cast_to_smallint(40_000.0).is_err());
}

#[test]
fn test_cast_nan_to_narrow_integral() {
    assert_eq!(cast_to_integer(f64::NAN).unwrap_err().kind, CastErrorKind::Overflow);
    assert_eq!(cast_to_smallint(f64::NAN).unwrap_err().kind, CastErrorKind::Overflow);
    assert_eq!(cast_to_tinyint(f64::NAN).unwrap_err().kind, CastErrorKind::Overflow);
}

#[test]
fn test_cast_to_tinyint_message() {
    let err = cast_to_tinyint(300.0).unwrap_err();
    assert_eq!(err.message, "Out of range for tinyint: 300.0");
}

// ============================================================================
// DOUBLE -> BOOLEAN / REAL
// ============================================================================

#[rstest]
#[case(37.7, true)]
#[case(17.1, true)]
#[case(0.0, false)]
#[case(-0.0, false)]
#[case(f64::NAN, true)]
fn test_cast_to_boolean(#[case] value: f64, #[case] expected: bool) {
    assert_eq!(cast_to_boolean(value), expected);
}

#[test]
fn test_cast_to_real() {
    assert!(cast_to_real(f64::NAN).is_nan());
    assert_eq!(cast_to_real(0.5), 0.5f32);
    assert_eq!(cast_to_real(-0.0).to_bits(), (-0.0f32).to_bits());
    assert_eq!(cast_to_real(1e300), f32::INFINITY);
    assert_eq!(cast_to_real(-1e300), f32::NEG_INFINITY);
}

// ============================================================================
// -> DOUBLE
// ============================================================================

#[rstest]
#[case("37.7", 37.7)]
#[case("17.1", 17.1)]
#[case(" 12e2 ", 1200.0)]
#[case("\r\n37.7\t", 37.7)]
#[case("-Infinity", f64::NEG_INFINITY)]
fn test_cast_from_varchar(#[case] text: &str, #[case] expected: f64) {
    assert_eq!(cast_from_varchar(text).unwrap(), expected);
}

#[test]
fn test_cast_from_varchar_nan() {
    assert!(cast_from_varchar("NaN").unwrap().is_nan());
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("inf")]
#[case("1.2.3")]
#[case("\u{a0}1")]
#[case("\u{2007}17.1\u{2007}")]
fn test_cast_from_varchar_malformed(#[case] text: &str) {
    let err = cast_from_varchar(text).unwrap_err();
    assert_eq!(err.kind, CastErrorKind::MalformedText);
    assert_eq!(err.message, format!("Cannot cast '{}' to DOUBLE", text));
}

#[test]
fn test_cast_from_other_types() {
    assert_eq!(cast_from_bigint(9_007_199_254_740_993), 9_007_199_254_740_992.0);
    assert_eq!(cast_from_real(0.5), 0.5);
    assert_eq!(cast_from_boolean(true), 1.0);
    assert_eq!(cast_from_boolean(false), 0.0);
}

#[test]
fn test_casts_into_double_through_registry() {
    let registry = registry();
    let cast = |from: SqlType, value: SqlValue| {
        registry.invoke(
            from,
            OperatorKind::Cast { target: SqlType::Double },
            NullConvention::Nullable,
            &[value],
        )
    };
    assert_eq!(cast(SqlType::VARCHAR, SqlValue::varchar("37.7")).unwrap(), d(37.7));
    assert_eq!(cast(SqlType::varchar(10), SqlValue::varchar("17.1")).unwrap(), d(17.1));
    assert_eq!(cast(SqlType::Integer, SqlValue::Integer(-3)).unwrap(), d(-3.0));
    assert_eq!(cast(SqlType::Tinyint, SqlValue::Tinyint(7)).unwrap(), d(7.0));
    assert_eq!(cast(SqlType::Boolean, SqlValue::Boolean(true)).unwrap(), d(1.0));
    assert_eq!(cast(SqlType::Bigint, SqlValue::Null).unwrap(), SqlValue::Null);

    let err = cast(SqlType::VARCHAR, SqlValue::varchar("abc")).unwrap_err();
    assert!(matches!(err, EvalError::Cast(_)));
    assert_eq!(err.to_string(), "Cannot cast 'abc' to DOUBLE");
}

// ============================================================================
// Saturated floor casts
// ============================================================================

#[test]
fn test_saturated_floor_casts() {
    assert_eq!(saturated_floor_cast_to_bigint(1e19).unwrap(), i64::MAX);
    assert_eq!(saturated_floor_cast_to_bigint(-1e19).unwrap(), i64::MIN);
    assert_eq!(saturated_floor_cast_to_bigint(-0.5).unwrap(), -1);
    assert_eq!(saturated_floor_cast_to_smallint(37.7).unwrap(), 37);
    assert_eq!(saturated_floor_cast_to_smallint(1e6).unwrap(), i16::MAX);
}

#[test]
fn test_saturated_floor_through_registry() {
    let result = registry()
        .invoke(
            SqlType::Double,
            OperatorKind::SaturatedFloorCast { target: SqlType::Integer },
            NullConvention::NeverNull,
            &[d(-1e12)],
        )
        .unwrap();
    assert_eq!(result, SqlValue::Integer(i32::MIN));
}

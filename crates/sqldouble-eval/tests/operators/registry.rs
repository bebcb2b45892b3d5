//! Registry Tests
//!
//! Tests for: lookup by (type, kind, convention), null conventions, argument
//! checking, and sharing the registry across threads

use super::{d, registry};
use pretty_assertions::assert_eq;
use rstest::rstest;
use sqldouble_eval::{EvalError, NullConvention, OperatorKey, OperatorKind, OperatorRegistry};
use sqldouble_types::{SqlType, SqlValue};
use std::sync::Arc;
use std::thread;

#[test]
fn test_every_simple_kind_is_registered_under_both_conventions() {
    let registry = registry();
    for kind in OperatorKind::SIMPLE {
        for convention in [NullConvention::NeverNull, NullConvention::Nullable] {
            let key = OperatorKey::new(SqlType::Double, kind, convention);
            assert!(registry.get(&key).is_some(), "missing {key}");
        }
    }
}

#[rstest]
#[case(SqlType::Double, SqlType::VARCHAR)]
#[case(SqlType::Double, SqlType::Bigint)]
#[case(SqlType::Double, SqlType::Integer)]
#[case(SqlType::Double, SqlType::Smallint)]
#[case(SqlType::Double, SqlType::Tinyint)]
#[case(SqlType::Double, SqlType::Boolean)]
#[case(SqlType::Double, SqlType::Real)]
#[case(SqlType::VARCHAR, SqlType::Double)]
#[case(SqlType::Bigint, SqlType::Double)]
#[case(SqlType::Integer, SqlType::Double)]
#[case(SqlType::Smallint, SqlType::Double)]
#[case(SqlType::Tinyint, SqlType::Double)]
#[case(SqlType::Real, SqlType::Double)]
#[case(SqlType::Boolean, SqlType::Double)]
fn test_casts_are_registered(#[case] from: SqlType, #[case] to: SqlType) {
    let registry = registry();
    let operator = registry
        .resolve(from, OperatorKind::Cast { target: to }, NullConvention::Nullable)
        .unwrap();
    assert_eq!(operator.signature().argument_types, vec![from]);
    assert_eq!(operator.signature().return_type, to);
}

#[test]
fn test_unknown_key_is_not_found() {
    let err = registry()
        .resolve(SqlType::Bigint, OperatorKind::Add, NullConvention::Nullable)
        .unwrap_err();
    assert!(matches!(err, EvalError::OperatorNotFound { .. }));
}

#[test]
fn test_never_null_rejects_null() {
    let registry = registry();
    for kind in [OperatorKind::Add, OperatorKind::IsDistinctFrom] {
        let err = registry
            .invoke(SqlType::Double, kind, NullConvention::NeverNull, &[SqlValue::Null, d(1.0)])
            .unwrap_err();
        assert!(matches!(err, EvalError::NullArgument { .. }), "{kind}");
    }
}

#[test]
fn test_nullable_returns_null() {
    let result = registry()
        .invoke(
            SqlType::Double,
            OperatorKind::Cast { target: SqlType::Bigint },
            NullConvention::Nullable,
            &[SqlValue::Null],
        )
        .unwrap();
    assert_eq!(result, SqlValue::Null);
}

#[test]
fn test_argument_checks() {
    let registry = registry();
    let err = registry
        .invoke(SqlType::Double, OperatorKind::Add, NullConvention::Nullable, &[d(1.0)])
        .unwrap_err();
    assert!(matches!(err, EvalError::ArgumentCount { expected: 2, found: 1, .. }));

    let err = registry
        .invoke(
            SqlType::Double,
            OperatorKind::Add,
            NullConvention::Nullable,
            &[d(1.0), SqlValue::Bigint(2)],
        )
        .unwrap_err();
    assert!(matches!(err, EvalError::TypeMismatch { .. }));
}

#[test]
fn test_keys_cover_both_conventions() {
    let registry = registry();
    assert_eq!(registry.len(), registry.keys().len());
    assert_eq!(registry.len() % 2, 0);
    let never_null = registry
        .keys()
        .into_iter()
        .filter(|key| key.convention == NullConvention::NeverNull)
        .count();
    assert_eq!(never_null * 2, registry.len());
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = Arc::new(OperatorRegistry::with_double_operators());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let value = f64::from(i) + 0.5;
                registry
                    .invoke(
                        SqlType::Double,
                        OperatorKind::Cast { target: SqlType::Bigint },
                        NullConvention::NeverNull,
                        &[SqlValue::Double(value)],
                    )
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<SqlValue> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![SqlValue::Bigint(1), SqlValue::Bigint(2), SqlValue::Bigint(3), SqlValue::Bigint(4)]
    );
}

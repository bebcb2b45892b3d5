//! SQL DOUBLE Operator Suite
//!
//! This crate provides the scalar operators of the SQL `DOUBLE` type
//! (IEEE-754 binary64) as plain functions and through a registry:
//!
//! - **Arithmetic Operators**: Add, Subtract, Multiply, Divide, Modulus, Negate
//! - **Comparison Operators**: Equal, NotEqual, Less, Greater, Between
//! - **Distinctness**: IsDistinctFrom, Indeterminate
//! - **Casts**: to VARCHAR, BIGINT, INTEGER, SMALLINT, TINYINT, BOOLEAN, REAL and back
//! - **Hashing**: HashCode, XxHash64 over canonical bits
//!
//! # Example
//!
//! ```
//! use sqldouble_eval::{NullConvention, OperatorKind, OperatorRegistry};
//! use sqldouble_types::{SqlType, SqlValue};
//!
//! let registry = OperatorRegistry::with_double_operators();
//! let sum = registry
//!     .invoke(
//!         SqlType::Double,
//!         OperatorKind::Add,
//!         NullConvention::Nullable,
//!         &[SqlValue::Double(37.7), SqlValue::Null],
//!     )
//!     .unwrap();
//! assert!(sum.is_null());
//! ```
//!
//! # Floating-point semantics
//!
//! Arithmetic and comparison follow IEEE-754 exactly: NaN compares unequal to
//! everything and `-0.0 = 0.0`. Distinctness and hashing instead treat all NaN
//! patterns as one value and both zeros as one value.

pub mod error;
pub mod operators;
pub mod registry;

// Re-export main types
pub use error::{CastError, CastErrorKind, EvalError, EvalResult};
pub use registry::{
    NullConvention, OperatorKey, OperatorKind, OperatorRegistry, OperatorSignature, ScalarOpFn,
    ScalarOperator,
};

// Re-export commonly used operator helpers
pub use operators::canonical::{CanonicalBits, canonicalize};
pub use operators::hash::{hash_code, xx_hash_64};

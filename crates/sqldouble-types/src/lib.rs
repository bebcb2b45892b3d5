//! SQL type model for the DOUBLE operator suite
//!
//! This crate defines:
//! - `SqlType`, the SQL types that DOUBLE operators consume and produce
//! - `SqlValue`, the runtime value representation including the null marker
//! - `double_text`, the canonical text form of DOUBLE and REAL values

pub mod double_text;
pub mod type_system;
pub mod value;

pub use double_text::{ParseDoubleError, format_double, format_real, parse_double};
pub use type_system::{SqlType, TypeParseError};
pub use value::SqlValue;

//! Diagnostics for the SQL DOUBLE operator suite
//!
//! This crate provides the error reporting infrastructure shared by the
//! operator crates and the command-line tool: stable error codes, a table of
//! descriptions, and user-facing diagnostics.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

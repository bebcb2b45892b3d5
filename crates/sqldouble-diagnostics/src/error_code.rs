//! Error codes following a structured numbering system
//!
//! Error code ranges:
//! - DBL0100-DBL0199: Resolution errors (operator lookup, signatures, type names)
//! - DBL0200-DBL0299: Evaluation errors (casts, null handling)
//! - DBL0400-DBL0499: System errors (configuration, output)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is an evaluation error (0200-0299)
    pub const fn is_evaluation_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DBL{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

use std::collections::HashMap;
use std::sync::LazyLock;

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Resolution errors (0100-0199)
    map.insert(100, ErrorInfo::new("Unknown operator name")
        .with_help("Run `dbl list` to see the registered operators"));
    map.insert(101, ErrorInfo::new("Operator not registered"));
    map.insert(110, ErrorInfo::new("Type mismatch"));
    map.insert(111, ErrorInfo::new("Invalid argument count"));
    map.insert(112, ErrorInfo::new("Unknown type name"));

    // Evaluation errors (0200-0299)
    map.insert(201, ErrorInfo::new("Null argument not allowed")
        .with_help("Use the nullable calling convention to propagate null"));
    map.insert(203, ErrorInfo::new("Numeric value out of range"));
    map.insert(205, ErrorInfo::new("Malformed numeric text"));
    map.insert(206, ErrorInfo::new("Value too long for type")
        .with_help("Widen the declared varchar length; values are never truncated"));

    // System errors (0400-0499)
    map.insert(400, ErrorInfo::new("Internal error"));
    map.insert(402, ErrorInfo::new("Configuration error"));
    map.insert(406, ErrorInfo::new("Invalid format"));

    map
});

// Resolution errors
pub const DBL0100: ErrorCode = ErrorCode::new(100);
pub const DBL0101: ErrorCode = ErrorCode::new(101);
pub const DBL0110: ErrorCode = ErrorCode::new(110);
pub const DBL0111: ErrorCode = ErrorCode::new(111);
pub const DBL0112: ErrorCode = ErrorCode::new(112);

// Evaluation errors
pub const DBL0201: ErrorCode = ErrorCode::new(201);
pub const DBL0203: ErrorCode = ErrorCode::new(203);
pub const DBL0205: ErrorCode = ErrorCode::new(205);
pub const DBL0206: ErrorCode = ErrorCode::new(206);

// System errors
pub const DBL0400: ErrorCode = ErrorCode::new(400);
pub const DBL0402: ErrorCode = ErrorCode::new(402);
pub const DBL0406: ErrorCode = ErrorCode::new(406);

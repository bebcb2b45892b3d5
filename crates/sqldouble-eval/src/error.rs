//! Evaluation errors for the DOUBLE operators

use sqldouble_diagnostics::{
    DBL0101, DBL0110, DBL0111, DBL0201, DBL0203, DBL0205, DBL0206, DblError, Diagnostic, ErrorCode,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Category of a failed cast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastErrorKind {
    /// The target type cannot represent the magnitude (including NaN/Infinity to integral types)
    Overflow,
    /// Text could not be parsed as a number
    MalformedText,
    /// Rendered text is longer than the declared bound
    LengthExceeded,
}

impl CastErrorKind {
    /// Stable error code for this kind of failure
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Overflow => DBL0203,
            Self::MalformedText => DBL0205,
            Self::LengthExceeded => DBL0206,
        }
    }
}

/// A failed cast, carrying the offending value and bound in its message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CastError {
    pub kind: CastErrorKind,
    pub message: String,
}

impl CastError {
    /// Create a cast error
    pub fn new(kind: CastErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create an overflow error
    pub fn overflow(message: impl Into<String>) -> Self {
        Self::new(CastErrorKind::Overflow, message)
    }

    /// Create a malformed-text error
    pub fn malformed_text(message: impl Into<String>) -> Self {
        Self::new(CastErrorKind::MalformedText, message)
    }

    /// Create a length-exceeded error
    pub fn length_exceeded(message: impl Into<String>) -> Self {
        Self::new(CastErrorKind::LengthExceeded, message)
    }
}

/// Errors that can occur while resolving or invoking an operator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Cast failure
    #[error(transparent)]
    Cast(#[from] CastError),

    /// Null passed under the never-null convention
    #[error("Null argument not allowed for {operator}")]
    NullArgument { operator: String },

    /// Wrong number of arguments
    #[error("{operator} expects {expected} argument(s), found {found}")]
    ArgumentCount {
        operator: String,
        expected: usize,
        found: usize,
    },

    /// Argument of the wrong type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// No operator registered under the requested key
    #[error("Operator not registered: {key}")]
    OperatorNotFound { key: String },
}

impl EvalError {
    /// Create a null argument error
    pub fn null_argument(operator: impl Into<String>) -> Self {
        Self::NullArgument {
            operator: operator.into(),
        }
    }

    /// Create an argument count error
    pub fn argument_count(operator: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ArgumentCount {
            operator: operator.into(),
            expected,
            found,
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an operator-not-found error
    pub fn operator_not_found(key: impl Into<String>) -> Self {
        Self::OperatorNotFound { key: key.into() }
    }

    /// The cast failure kind, if this is a cast error
    pub fn cast_kind(&self) -> Option<CastErrorKind> {
        match self {
            Self::Cast(err) => Some(err.kind),
            _ => None,
        }
    }

    /// Stable error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Cast(err) => err.kind.error_code(),
            Self::NullArgument { .. } => DBL0201,
            Self::ArgumentCount { .. } => DBL0111,
            Self::TypeMismatch { .. } => DBL0110,
            Self::OperatorNotFound { .. } => DBL0101,
        }
    }

    /// Convert to a user-facing diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        DblError::from(self.clone()).to_diagnostic()
    }
}

impl From<EvalError> for DblError {
    fn from(err: EvalError) -> Self {
        let code = err.code();
        if code.is_evaluation_error() {
            DblError::evaluation(code, err.to_string())
        } else {
            DblError::resolution(code, err.to_string())
        }
    }
}

//! Diagnostic and top-level error types

use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - the operation produced no value
    Error,
    /// Warning - a value was produced but may surprise the caller
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A user-facing diagnostic message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Operator or cast that produced the diagnostic
    pub operator: Option<String>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            operator: None,
            help: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            operator: None,
            help: None,
        }
    }

    /// Attach the operator name
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render with terminal colors
    #[cfg(feature = "colored")]
    pub fn render_colored(&self) -> String {
        use colored::Colorize;

        let severity = match self.severity {
            Severity::Error => self.severity.to_string().red().bold(),
            Severity::Warning => self.severity.to_string().yellow().bold(),
        };
        let mut out = format!(
            "{}[{}]: {}",
            severity,
            self.code.to_string().bold(),
            self.message
        );
        if let Some(operator) = &self.operator {
            out.push_str(&format!("\n  {} {}", "-->".cyan(), operator));
        }
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".green(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(operator) = &self.operator {
            write!(f, " in {}", operator)?;
        }
        Ok(())
    }
}

/// Top-level error type shared by the operator crates and the CLI
#[derive(Debug, Clone, Error)]
pub enum DblError {
    /// Operator lookup or signature error
    #[error("{code}: {message}")]
    Resolution { code: ErrorCode, message: String },

    /// Operator evaluation error
    #[error("{code}: {message}")]
    Evaluation {
        code: ErrorCode,
        message: String,
        operator: Option<String>,
    },

    /// System error
    #[error("{code}: {message}")]
    System { code: ErrorCode, message: String },
}

impl DblError {
    /// Create a resolution error
    pub fn resolution(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Resolution {
            code,
            message: message.into(),
        }
    }

    /// Create an evaluation error
    pub fn evaluation(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Evaluation {
            code,
            message: message.into(),
            operator: None,
        }
    }

    /// Create a system error
    pub fn system(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::System {
            code,
            message: message.into(),
        }
    }

    /// Attach the operator that failed (evaluation errors only)
    pub fn in_operator(mut self, name: impl Into<String>) -> Self {
        if let Self::Evaluation { operator, .. } = &mut self {
            *operator = Some(name.into());
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Resolution { code, .. } => *code,
            Self::Evaluation { code, .. } => *code,
            Self::System { code, .. } => *code,
        }
    }

    /// Convert to a diagnostic; help text comes from the code table
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, message) = match self {
            Self::Resolution { code, message }
            | Self::Evaluation { code, message, .. }
            | Self::System { code, message } => (*code, message.clone()),
        };
        let mut diag = Diagnostic::error(code, message);
        if let Self::Evaluation {
            operator: Some(op), ..
        } = self
        {
            diag = diag.with_operator(op.clone());
        }
        if let Some(help) = code.info().help {
            diag = diag.with_help(help);
        }
        diag
    }
}

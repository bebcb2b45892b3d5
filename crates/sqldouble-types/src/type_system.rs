//! SQL Type System
//!
//! This module defines the SQL types the DOUBLE operator suite works with:
//! - `SqlType` enum with the integral, floating-point, boolean and text types
//! - Parsing and display of SQL type names (`double`, `varchar(5)`, ...)
//! - Range information for the integral types used by narrowing casts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The SQL types known to the operator suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "length")]
pub enum SqlType {
    /// Boolean type (true/false/null)
    Boolean,
    /// 8-bit signed integer
    Tinyint,
    /// 16-bit signed integer
    Smallint,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Bigint,
    /// 32-bit IEEE-754 floating point
    Real,
    /// 64-bit IEEE-754 floating point
    Double,
    /// Character string with an optional declared maximum length
    Varchar(Option<u32>),
}

impl SqlType {
    /// Unbounded varchar
    pub const VARCHAR: SqlType = SqlType::Varchar(None);

    /// Create a varchar type bounded to `length` characters
    pub const fn varchar(length: u32) -> Self {
        Self::Varchar(Some(length))
    }

    /// Get the SQL name without parameters
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Tinyint => "tinyint",
            Self::Smallint => "smallint",
            Self::Integer => "integer",
            Self::Bigint => "bigint",
            Self::Real => "real",
            Self::Double => "double",
            Self::Varchar(_) => "varchar",
        }
    }

    /// The type with its parameters stripped (`varchar(5)` becomes `varchar`)
    pub const fn base(&self) -> Self {
        match self {
            Self::Varchar(_) => Self::Varchar(None),
            other => *other,
        }
    }

    /// Inclusive value range of an integral type
    pub const fn integral_range(&self) -> Option<(i64, i64)> {
        match self {
            Self::Tinyint => Some((i8::MIN as i64, i8::MAX as i64)),
            Self::Smallint => Some((i16::MIN as i64, i16::MAX as i64)),
            Self::Integer => Some((i32::MIN as i64, i32::MAX as i64)),
            Self::Bigint => Some((i64::MIN, i64::MAX)),
            _ => None,
        }
    }

    /// Declared maximum length for bounded varchar
    pub const fn max_length(&self) -> Option<u32> {
        match self {
            Self::Varchar(length) => *length,
            _ => None,
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Varchar(Some(length)) => write!(f, "varchar({})", length),
            other => write!(f, "{}", other.name()),
        }
    }
}

/// Error returned when a type name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown type: {name}")]
pub struct TypeParseError {
    pub name: String,
}

impl FromStr for SqlType {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let error = || TypeParseError { name: s.trim().to_string() };

        if let Some(rest) = normalized.strip_prefix("varchar") {
            let rest = rest.trim();
            if rest.is_empty() {
                return Ok(Self::VARCHAR);
            }
            let length = rest
                .strip_prefix('(')
                .and_then(|r| r.strip_suffix(')'))
                .and_then(|r| r.trim().parse::<u32>().ok())
                .ok_or_else(error)?;
            return Ok(Self::varchar(length));
        }

        match normalized.split_whitespace().collect::<Vec<_>>().join(" ").as_str() {
            "boolean" => Ok(Self::Boolean),
            "tinyint" => Ok(Self::Tinyint),
            "smallint" => Ok(Self::Smallint),
            "integer" | "int" => Ok(Self::Integer),
            "bigint" => Ok(Self::Bigint),
            "real" | "float" => Ok(Self::Real),
            "double" | "double precision" => Ok(Self::Double),
            _ => Err(error()),
        }
    }
}

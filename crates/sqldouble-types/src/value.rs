//! SQL Value types - runtime representation of operator arguments and results
//!
//! The null marker is carried in-band as `SqlValue::Null` so that the
//! registry can apply a calling convention uniformly; the operators themselves
//! work on plain Rust scalars.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::SqlType;
use crate::double_text::{format_double, format_real};

/// A runtime SQL value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum SqlValue {
    /// SQL NULL
    Null,
    /// Boolean value
    Boolean(bool),
    /// 8-bit signed integer
    Tinyint(i8),
    /// 16-bit signed integer
    Smallint(i16),
    /// 32-bit signed integer
    Integer(i32),
    /// 64-bit signed integer
    Bigint(i64),
    /// 32-bit float
    Real(#[serde(with = "float_text::real")] f32),
    /// 64-bit float
    Double(#[serde(with = "float_text::double")] f64),
    /// Character string
    Varchar(String),
}

impl SqlValue {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get the SQL type of this value, `None` for null
    pub fn get_type(&self) -> Option<SqlType> {
        match self {
            Self::Null => None,
            Self::Boolean(_) => Some(SqlType::Boolean),
            Self::Tinyint(_) => Some(SqlType::Tinyint),
            Self::Smallint(_) => Some(SqlType::Smallint),
            Self::Integer(_) => Some(SqlType::Integer),
            Self::Bigint(_) => Some(SqlType::Bigint),
            Self::Real(_) => Some(SqlType::Real),
            Self::Double(_) => Some(SqlType::Double),
            Self::Varchar(_) => Some(SqlType::VARCHAR),
        }
    }

    /// Try to get as Double
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get as Real
    pub fn as_real(&self) -> Option<f32> {
        match self {
            Self::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Try to get as Boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Varchar(s) => Some(s),
            _ => None,
        }
    }

    /// Create a varchar value
    pub fn varchar(value: impl Into<String>) -> Self {
        Self::Varchar(value.into())
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Tinyint(v) => write!(f, "{}", v),
            Self::Smallint(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Bigint(v) => write!(f, "{}", v),
            Self::Real(v) => f.write_str(&format_real(*v)),
            Self::Double(v) => f.write_str(&format_double(*v)),
            Self::Varchar(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

/// Float fields as JSON numbers when finite, SQL text (`NaN`, `Infinity`,
/// `-Infinity`) otherwise. Either form reads back.
mod float_text {
    use crate::double_text::parse_double;
    use serde::de::{self, Visitor};
    use std::fmt;

    struct DoubleVisitor;

    impl Visitor<'_> for DoubleVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or a DOUBLE literal")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
            parse_double(value).map_err(E::custom)
        }
    }

    pub mod double {
        use crate::double_text::format_double;
        use serde::{Deserializer, Serializer};

        pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
            if value.is_finite() {
                serializer.serialize_f64(*value)
            } else {
                serializer.serialize_str(&format_double(*value))
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
            deserializer.deserialize_any(super::DoubleVisitor)
        }
    }

    pub mod real {
        use crate::double_text::format_real;
        use serde::{Deserializer, Serializer};

        pub fn serialize<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
            if value.is_finite() {
                serializer.serialize_f32(*value)
            } else {
                serializer.serialize_str(&format_real(*value))
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
            deserializer
                .deserialize_any(super::DoubleVisitor)
                .map(|value| value as f32)
        }
    }
}

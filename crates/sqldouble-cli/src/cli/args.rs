//! Command-line argument parsing into SQL types and values

use sqldouble_diagnostics::{DBL0112, DBL0406, DblError};
use sqldouble_eval::NullConvention;
use sqldouble_types::{SqlType, SqlValue, parse_double};

/// Parse a type name such as `double` or `varchar(5)`
pub fn parse_type(name: &str) -> Result<SqlType, DblError> {
    name.parse::<SqlType>()
        .map_err(|e| DblError::resolution(DBL0112, e.to_string()))
}

/// Parse an argument as a value of `ty`. `null` (any case) is the SQL null.
pub fn parse_value(text: &str, ty: SqlType) -> Result<SqlValue, DblError> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("null") {
        return Ok(SqlValue::Null);
    }

    let invalid = || DblError::system(DBL0406, format!("Invalid {} argument: '{}'", ty, text));
    let value = match ty {
        SqlType::Double => SqlValue::Double(parse_double(text).map_err(|_| invalid())?),
        SqlType::Real => SqlValue::Real(parse_double(text).map_err(|_| invalid())? as f32),
        SqlType::Bigint => SqlValue::Bigint(trimmed.parse().map_err(|_| invalid())?),
        SqlType::Integer => SqlValue::Integer(trimmed.parse().map_err(|_| invalid())?),
        SqlType::Smallint => SqlValue::Smallint(trimmed.parse().map_err(|_| invalid())?),
        SqlType::Tinyint => SqlValue::Tinyint(trimmed.parse().map_err(|_| invalid())?),
        SqlType::Boolean => match trimmed.to_ascii_lowercase().as_str() {
            "true" => SqlValue::Boolean(true),
            "false" => SqlValue::Boolean(false),
            _ => return Err(invalid()),
        },
        SqlType::Varchar(_) => SqlValue::Varchar(text.to_string()),
    };
    Ok(value)
}

pub fn convention(nullable: bool) -> NullConvention {
    if nullable {
        NullConvention::Nullable
    } else {
        NullConvention::NeverNull
    }
}

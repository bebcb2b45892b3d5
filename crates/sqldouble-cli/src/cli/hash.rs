//! Hash command implementation

use super::args::parse_value;
use super::output::Report;
use anyhow::Result;
use serde_json::json;
use sqldouble_diagnostics::DblError;
use sqldouble_eval::{EvalError, NullConvention, OperatorKind, OperatorRegistry, canonicalize};
use sqldouble_types::{SqlType, SqlValue};

/// Print canonical bits, `hash_code` and `xx_hash_64` of one double
pub fn hash(registry: &OperatorRegistry, text: &str) -> Result<Report> {
    let value = parse_value(text, SqlType::Double)?;
    let &SqlValue::Double(double) = &value else {
        return Err(DblError::from(EvalError::null_argument("hash")).into());
    };
    let bits = canonicalize(double).bits();

    let invoke = |kind: OperatorKind| {
        registry
            .invoke(SqlType::Double, kind, NullConvention::NeverNull, std::slice::from_ref(&value))
            .map_err(|e| DblError::from(e).in_operator(kind.to_string()))
    };
    let hash_code = invoke(OperatorKind::HashCode)?;
    let xx_hash_64 = invoke(OperatorKind::XxHash64)?;

    let plain = format!(
        "value           {}\ncanonical_bits  {:#018x}\nhash_code       {}\nxx_hash_64      {}",
        value, bits, hash_code, xx_hash_64
    );
    let json = json!({
        "value": value.to_string(),
        "canonical_bits": format!("{:#018x}", bits),
        "hash_code": hash_code,
        "xx_hash_64": xx_hash_64,
    });
    Ok(Report::new(plain, json))
}

//! Cast command implementation

use super::args::{convention, parse_type, parse_value};
use super::output::Report;
use anyhow::Result;
use serde_json::json;
use sqldouble_diagnostics::DblError;
use sqldouble_eval::{OperatorKind, OperatorRegistry};

/// Configuration for cast command
pub struct CastConfig {
    pub value: String,
    pub to: String,
    pub from: String,
    pub saturated: bool,
    pub nullable: bool,
}

/// Cast a single value between two types
pub fn cast(registry: &OperatorRegistry, config: CastConfig) -> Result<Report> {
    let from = parse_type(&config.from)?;
    let to = parse_type(&config.to)?;
    let kind = if config.saturated {
        OperatorKind::SaturatedFloorCast { target: to }
    } else {
        OperatorKind::Cast { target: to }
    };
    let value = parse_value(&config.value, from)?;
    let description = format!("{}({} as {})", kind.name(), from, to);

    let result = registry
        .invoke(from, kind, convention(config.nullable), std::slice::from_ref(&value))
        .map_err(|e| DblError::from(e).in_operator(description.clone()))?;

    let json = json!({
        "cast": description,
        "value": value,
        "result": result,
        "text": result.to_string(),
    });
    Ok(Report::new(result.to_string(), json))
}

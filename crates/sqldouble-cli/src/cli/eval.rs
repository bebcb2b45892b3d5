//! Eval command implementation

use super::args::{convention, parse_type, parse_value};
use super::output::Report;
use anyhow::Result;
use log::debug;
use serde_json::json;
use sqldouble_diagnostics::{DBL0100, DblError};
use sqldouble_eval::{EvalError, OperatorKind, OperatorRegistry};
use sqldouble_types::SqlValue;

/// Configuration for eval command
pub struct EvalConfig {
    pub operator: String,
    pub args: Vec<String>,
    pub operand_type: String,
    pub nullable: bool,
}

/// Resolve an operator by name and invoke it on the parsed arguments
pub fn eval(registry: &OperatorRegistry, config: EvalConfig) -> Result<Report> {
    let kind = OperatorKind::from_name(&config.operator).ok_or_else(|| {
        DblError::resolution(DBL0100, format!("Unknown operator '{}'", config.operator))
    })?;
    let operand_type = parse_type(&config.operand_type)?;
    let convention = convention(config.nullable);

    let operator = registry
        .resolve(operand_type, kind, convention)
        .map_err(DblError::from)?;
    let signature = operator.signature();

    let expected = signature.argument_types.len();
    if config.args.len() != expected {
        let err = EvalError::argument_count(signature.to_string(), expected, config.args.len());
        return Err(DblError::from(err).into());
    }

    let arguments = config
        .args
        .iter()
        .zip(&signature.argument_types)
        .map(|(text, ty)| parse_value(text, *ty))
        .collect::<Result<Vec<SqlValue>, DblError>>()?;

    debug!("invoking {} [{}] with {:?}", signature, convention, arguments);
    let result = operator
        .invoke(&arguments)
        .map_err(|e| DblError::from(e).in_operator(signature.to_string()))?;

    let json = json!({
        "operator": signature.to_string(),
        "convention": convention.to_string(),
        "arguments": arguments,
        "result": result,
        "text": result.to_string(),
    });
    Ok(Report::new(result.to_string(), json))
}

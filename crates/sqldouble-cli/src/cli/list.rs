//! List command implementation

use super::output::Report;
use serde_json::{Value, json};
use sqldouble_eval::OperatorRegistry;

/// Every registered (key, signature) pair, sorted by key
pub fn list(registry: &OperatorRegistry) -> Report {
    let mut lines = Vec::new();
    let mut entries = Vec::new();

    for key in registry.keys() {
        let Some(operator) = registry.get(&key) else {
            continue;
        };
        let signature = operator.signature().to_string();
        lines.push(format!("{:<12} {}", key.convention.to_string(), signature));
        entries.push(json!({
            "key": key,
            "signature": signature,
        }));
    }

    lines.push(format!("{} operators", entries.len()));
    Report::new(lines.join("\n"), Value::Array(entries))
}

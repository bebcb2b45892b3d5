//! Output formatting utilities

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde_json::Value;
use sqldouble_diagnostics::{DBL0400, DBL0402, DblError, Diagnostic};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Command result, renderable as plain text or JSON
#[derive(Debug)]
pub struct Report {
    plain: String,
    json: Value,
}

impl Report {
    pub fn new(plain: impl Into<String>, json: Value) -> Self {
        Self {
            plain: plain.into(),
            json,
        }
    }

    pub fn render(self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Plain => Ok(self.plain),
            OutputFormat::Json => {
                serde_json::to_string_pretty(&self.json).context("Failed to serialize JSON")
            }
        }
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: ColorMode) {
    let enabled = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stderr().is_terminal(),
    };
    colored::control::set_override(enabled);
}

/// Install the log subscriber. `-v` wins over `RUST_LOG`; the default is `warn`.
pub fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(e) => {
                if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
                    let warning = Diagnostic::warning(
                        DBL0402,
                        format!("Ignoring {}: {}", EnvFilter::DEFAULT_ENV, e),
                    );
                    eprintln!("{}", warning);
                }
                EnvFilter::new("warn")
            }
        },
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // A subscriber may already be installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Diagnostic for any error reaching the top level
pub fn to_diagnostic(error: &anyhow::Error) -> Diagnostic {
    match error.downcast_ref::<DblError>() {
        Some(e) => e.to_diagnostic(),
        None => Diagnostic::error(DBL0400, format!("{:#}", error)),
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error, format: OutputFormat) -> String {
    let diagnostic = to_diagnostic(error);
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&diagnostic)
            .unwrap_or_else(|_| diagnostic.to_string()),
        OutputFormat::Plain if colored::control::SHOULD_COLORIZE.should_colorize() => {
            diagnostic.render_colored()
        }
        OutputFormat::Plain => match &diagnostic.help {
            Some(help) => format!("{}\n  help: {}", diagnostic, help),
            None => diagnostic.to_string(),
        },
    }
}

//! CLI command implementations

pub mod args;
pub mod cast;
pub mod eval;
pub mod hash;
pub mod list;
pub mod output;

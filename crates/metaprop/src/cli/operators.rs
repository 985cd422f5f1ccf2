//! Operators command implementation

use super::{config, output};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration for operators command
pub struct OperatorsConfig {
    pub registry_config: Option<PathBuf>,
    pub output_format: output::OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Listing of the registered operators as JSON
pub fn list(config: &OperatorsConfig) -> Result<serde_json::Value> {
    let registry = config::load_registry(config.registry_config.as_deref())?;
    serde_json::to_value(registry.operators()).context("Failed to serialize operator listing")
}

/// Run the operators command
pub fn run(config: OperatorsConfig) -> Result<()> {
    let listing = list(&config)?;
    output::print_output(&listing, config.output_format, config.output_file.as_deref())
}

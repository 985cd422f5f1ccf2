//! Configuration and input loading shared by the commands

use anyhow::{Context, Result};
use metaprop_eval::{OperatorRegistry, RegistryConfig};
use metaprop_types::Value;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

/// Load the registry configuration, or the defaults when no file is given
pub fn load_registry_config(path: Option<&Path>) -> Result<RegistryConfig> {
    match path {
        Some(path) => {
            let config: RegistryConfig = read_json(path)?;
            log::debug!(
                "loaded registry config from {}: {} alias(es), {} disabled",
                path.display(),
                config.aliases.len(),
                config.disabled.len()
            );
            Ok(config)
        }
        None => Ok(RegistryConfig::default()),
    }
}

/// Build the operator registry for a command
pub fn load_registry(path: Option<&Path>) -> Result<OperatorRegistry> {
    let config = load_registry_config(path)?;
    OperatorRegistry::from_config(&config).context("Invalid registry configuration")
}

/// Classify a command-line operand.
///
/// JSON literals (`3`, `3.0`, `"x"`, `[1, 2]`, `null`) keep their shape;
/// anything that is not valid JSON is taken as text.
pub fn parse_operand(text: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(json) => Value::from(json),
        Err(_) => Value::text(text),
    }
}

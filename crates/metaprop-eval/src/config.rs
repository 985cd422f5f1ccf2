//! Registry configuration
//!
//! The identifier set is configuration: deployments can add aliases for the
//! standard operators or disable some of them without touching evaluation
//! code.
//!
//! ```json
//! {
//!   "aliases": { "<": "lt", "not_less": "ge" },
//!   "disabled": ["or"]
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Adjustments applied to the standard operator table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Alias -> target identifier
    pub aliases: IndexMap<String, String>,
    /// Standard identifiers removed from the table
    pub disabled: Vec<String>,
}

impl RegistryConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON text
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Add an alias
    pub fn with_alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), target.into());
        self
    }

    /// Disable a standard identifier
    pub fn with_disabled(mut self, identifier: impl Into<String>) -> Self {
        self.disabled.push(identifier.into());
        self
    }
}

//! Meta-predicate evaluation for Rust
//!
//! This crate bundles the metaprop workspace:
//! - A closed value model for operands (`types`)
//! - Comparison, size and logical evaluators with an operator registry (`eval`)
//! - Metadata selection over candidate records
//! - Property validation keyed by type
//!
//! # Example
//!
//! ```
//! use metaprop::{MetaEngine, Value};
//!
//! let engine = MetaEngine::new();
//! assert_eq!(engine.evaluate("lt", &Value::Integer(7), &Value::Integer(10)), Ok(true));
//! assert_eq!(engine.evaluate("lt", &Value::text("high"), &Value::Integer(10)), Ok(false));
//! assert!(engine.evaluate("between", &Value::Integer(7), &Value::Integer(10)).is_err());
//! ```

// Re-export all public APIs from internal crates
pub use metaprop_eval as eval;
pub use metaprop_types as types;

// Convenience re-exports
pub use metaprop_eval::{
    Candidate, Evaluator, MetaEngine, MetaQuery, MetaSelector, OperatorExpr, OperatorRegistry, Predicate,
    RegistryConfig, RegistryError, RegistryResult,
};
pub use metaprop_types::{Value, ValueKind};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;

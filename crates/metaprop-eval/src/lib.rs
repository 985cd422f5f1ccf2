//! metaprop evaluation engine
//!
//! This crate evaluates meta-predicates: small composable evaluators that
//! compare two classified operands and return a verdict.
//!
//! - **Comparison Operators**: `lt`, `gt`, `le`, `ge`, `eq` over mixed Integer/Real operands
//! - **Size Operators**: `size_eq`, `size_gt`, `size_lt`, `size_ge`, `size_le` over Text and Sequence
//! - **Logical Combinators**: `not`, `and`, `or` wrapping other evaluators
//! - **Operator Registry**: resolves identifiers (and composite expressions) to evaluators
//! - **Metadata Queries**: compiled selectors filtering candidates by their metadata
//! - **Property Validation**: constraint validators looked up by type key
//!
//! # Example
//!
//! ```
//! use metaprop_eval::{Evaluator, OperatorRegistry};
//! use metaprop_types::Value;
//!
//! let registry = OperatorRegistry::with_standard_operators();
//! let not_less = registry.resolve_str("not:lt").unwrap();
//!
//! assert!(not_less.evaluate(&Value::Integer(3), &Value::Real(3.0)));
//! assert!(not_less.evaluate(&Value::text("x"), &Value::Integer(1)));
//! ```
//!
//! # Fail-soft evaluation
//!
//! Evaluation never fails. An operand pair outside an evaluator's domain
//! (comparing text with `lt`, sizing an integer) yields `false`, and negation
//! inverts that to `true`. The only error path is resolution: an unknown
//! operator identifier is rejected before anything is evaluated.

pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod expr;
pub mod operators;
pub mod predicate;
pub mod query;
pub mod registry;
pub mod validation;

// Re-export main types
pub use config::RegistryConfig;
pub use engine::MetaEngine;
pub use error::{RegistryError, RegistryResult, ValidationError, ValidationResult};
pub use evaluator::Evaluator;
pub use expr::OperatorExpr;
pub use operators::Comparison;
pub use predicate::Predicate;
pub use query::{Candidate, MetaQuery, MetaSelector};
pub use registry::{OperatorCategory, OperatorInfo, OperatorRegistry, SharedOperatorRegistry};
pub use validation::{ConstraintValidator, PropertyConstraint, PropertyValidator, ValidatorRegistry};

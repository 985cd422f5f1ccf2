//! Errors for operator resolution and property validation
//!
//! Evaluation itself has no error path. These errors are raised when an
//! operator is resolved or a registry is built, and by validators built on
//! top of the engine.

use metaprop_types::Value;
use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Result type for property validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors raised while building a registry or resolving an operator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Operator identifier is not registered
    #[error("Unknown operator: {operator}")]
    UnknownOperator { operator: String },

    /// Combinator applied to the wrong number of operands
    #[error("Operator {operator} expects {expected} operand expression(s), found {found}")]
    ArityMismatch {
        operator: String,
        expected: usize,
        found: usize,
    },

    /// Identifier registered twice
    #[error("Operator already registered: {operator}")]
    DuplicateOperator { operator: String },

    /// Alias pointing at an identifier that does not exist
    #[error("Alias {alias} refers to unknown operator {target}")]
    UnknownAliasTarget { alias: String, target: String },

    /// Malformed operator expression
    #[error("Invalid operator expression '{expression}': {message}")]
    InvalidExpression { expression: String, message: String },
}

impl RegistryError {
    /// Create an unknown operator error
    pub fn unknown_operator(operator: impl Into<String>) -> Self {
        Self::UnknownOperator {
            operator: operator.into(),
        }
    }

    /// Create an arity mismatch error
    pub fn arity_mismatch(operator: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ArityMismatch {
            operator: operator.into(),
            expected,
            found,
        }
    }

    /// Create a duplicate operator error
    pub fn duplicate_operator(operator: impl Into<String>) -> Self {
        Self::DuplicateOperator {
            operator: operator.into(),
        }
    }

    /// Create an unknown alias target error
    pub fn unknown_alias_target(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self::UnknownAliasTarget {
            alias: alias.into(),
            target: target.into(),
        }
    }

    /// Create an invalid expression error
    pub fn invalid_expression(expression: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidExpression {
            expression: expression.into(),
            message: message.into(),
        }
    }

    /// Check if this is the unknown operator condition
    pub fn is_unknown_operator(&self) -> bool {
        matches!(self, Self::UnknownOperator { .. })
    }
}

/// Errors raised by property validators
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// No validator registered under the type key
    #[error("No validator registered for type key: {type_key}")]
    UnknownValidator { type_key: String },

    /// Value does not satisfy the declared constraint
    #[error("Value {value} violates constraint {constraint}")]
    ConstraintViolated { constraint: String, value: Value },

    /// Validator could not be built
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl ValidationError {
    /// Create an unknown validator error
    pub fn unknown_validator(type_key: impl Into<String>) -> Self {
        Self::UnknownValidator {
            type_key: type_key.into(),
        }
    }

    /// Create a constraint violation error
    pub fn constraint_violated(constraint: impl Into<String>, value: Value) -> Self {
        Self::ConstraintViolated {
            constraint: constraint.into(),
            value,
        }
    }

    /// Check if no validator was found for the type key
    pub fn is_unknown_validator(&self) -> bool {
        matches!(self, Self::UnknownValidator { .. })
    }
}

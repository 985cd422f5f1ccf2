//! Property validation on top of the predicate engine
//!
//! Properties declare constraints such as "length at most 64" or "port
//! greater than 1024". A [`ConstraintValidator`] resolves those constraints
//! once and checks values against them: the property value is the left
//! operand, the declared bound the right one.
//!
//! [`ValidatorRegistry`] maps a symbolic type key (`"service.port"`,
//! `"cloud.name"`) to the validator responsible for it.

use crate::error::{RegistryResult, ValidationError, ValidationResult};
use crate::evaluator::Evaluator;
use crate::expr::OperatorExpr;
use crate::predicate::Predicate;
use crate::registry::OperatorRegistry;
use indexmap::IndexMap;
use metaprop_types::Value;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Checks a property value
pub trait PropertyValidator: Send + Sync {
    /// Validate a property value
    fn validate(&self, value: &Value) -> ValidationResult<()>;
}

/// Declared constraint for properties of a type key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyConstraint {
    /// Type key the constraint applies to
    pub type_key: String,
    /// Operator relating the property value to the bound
    pub operator: OperatorExpr,
    /// Right operand
    #[serde(with = "metaprop_types::plain")]
    pub bound: Value,
}

impl PropertyConstraint {
    /// Create a new constraint
    pub fn new(type_key: impl Into<String>, operator: impl Into<OperatorExpr>, bound: impl Into<Value>) -> Self {
        Self {
            type_key: type_key.into(),
            operator: operator.into(),
            bound: bound.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct Clause {
    label: String,
    predicate: Predicate,
    bound: Value,
}

/// Validator requiring every declared clause to hold
#[derive(Debug, Clone, Default)]
pub struct ConstraintValidator {
    clauses: Vec<Clause>,
}

impl ConstraintValidator {
    /// Create a validator with no clauses (accepts every value)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clause, resolving its operator against `registry`
    pub fn with_clause(
        mut self,
        registry: &OperatorRegistry,
        operator: &OperatorExpr,
        bound: impl Into<Value>,
    ) -> RegistryResult<Self> {
        let predicate = registry.resolve_expr(operator)?;
        let bound = bound.into();
        self.clauses.push(Clause {
            label: format!("{} {}", operator, bound),
            predicate,
            bound,
        });
        Ok(self)
    }

    /// Number of clauses
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Check if the validator has no clauses
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl PropertyValidator for ConstraintValidator {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        match self
            .clauses
            .iter()
            .find(|clause| !clause.predicate.evaluate(value, &clause.bound))
        {
            Some(clause) => Err(ValidationError::constraint_violated(&clause.label, value.clone())),
            None => Ok(()),
        }
    }
}

/// Validators keyed by symbolic type key
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    validators: IndexMap<String, Arc<dyn PropertyValidator>>,
}

impl ValidatorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build constraint validators from declarations.
    ///
    /// Constraints sharing a type key are combined; all of them must hold.
    pub fn from_constraints(
        registry: &OperatorRegistry,
        constraints: impl IntoIterator<Item = PropertyConstraint>,
    ) -> ValidationResult<Self> {
        let mut grouped: IndexMap<String, ConstraintValidator> = IndexMap::new();
        for constraint in constraints {
            let slot = grouped.entry(constraint.type_key).or_default();
            *slot = std::mem::take(slot).with_clause(registry, &constraint.operator, constraint.bound)?;
        }

        let mut validators = Self::new();
        for (type_key, validator) in grouped {
            log::debug!("validator {} with {} clause(s)", type_key, validator.len());
            validators.register(type_key, Arc::new(validator));
        }
        Ok(validators)
    }

    /// Register a validator, replacing any previous one for the type key
    pub fn register(&mut self, type_key: impl Into<String>, validator: Arc<dyn PropertyValidator>) {
        self.validators.insert(type_key.into(), validator);
    }

    /// Get the validator for a type key
    pub fn get(&self, type_key: &str) -> Option<&Arc<dyn PropertyValidator>> {
        self.validators.get(type_key)
    }

    /// Registered type keys
    pub fn type_keys(&self) -> impl Iterator<Item = &str> {
        self.validators.keys().map(String::as_str)
    }

    /// Validate `value` with the validator registered for `type_key`
    pub fn validate(&self, type_key: &str, value: &Value) -> ValidationResult<()> {
        self.get(type_key)
            .ok_or_else(|| ValidationError::unknown_validator(type_key))?
            .validate(value)
    }
}

//! Meta-predicate engine
//!
//! This module provides the [`MetaEngine`] facade: resolve an operator through
//! the registry and apply it to a pair of operands in one call. Callers that
//! check many operand pairs should resolve once and keep the [`Predicate`].

use crate::config::RegistryConfig;
use crate::error::RegistryResult;
use crate::evaluator::Evaluator;
use crate::expr::OperatorExpr;
use crate::predicate::Predicate;
use crate::query::{Candidate, MetaQuery, MetaSelector};
use crate::registry::OperatorRegistry;
use metaprop_types::Value;

/// The main evaluation engine
#[derive(Debug, Clone)]
pub struct MetaEngine {
    registry: OperatorRegistry,
}

impl Default for MetaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaEngine {
    /// Create a new engine with standard operators
    pub fn new() -> Self {
        Self {
            registry: OperatorRegistry::with_standard_operators(),
        }
    }

    /// Create an engine with a custom registry
    pub fn with_registry(registry: OperatorRegistry) -> Self {
        Self { registry }
    }

    /// Create an engine whose registry is the standard table adjusted by `config`
    pub fn from_config(config: &RegistryConfig) -> RegistryResult<Self> {
        OperatorRegistry::from_config(config).map(Self::with_registry)
    }

    /// Get the registry
    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// Get a mutable reference to the registry
    pub fn registry_mut(&mut self) -> &mut OperatorRegistry {
        &mut self.registry
    }

    /// Resolve an operator in textual form (`"lt"`, `"not:lt"`)
    pub fn resolve(&self, operator: &str) -> RegistryResult<Predicate> {
        self.registry.resolve_str(operator)
    }

    /// Resolve `operator` and apply it to `left` and `right`.
    ///
    /// The only error is an unresolvable operator; inapplicable operands give `false`.
    pub fn evaluate(&self, operator: &str, left: &Value, right: &Value) -> RegistryResult<bool> {
        Ok(self.resolve(operator)?.evaluate(left, right))
    }

    /// Resolve an operator expression and apply it to `left` and `right`
    pub fn evaluate_expr(&self, operator: &OperatorExpr, left: &Value, right: &Value) -> RegistryResult<bool> {
        Ok(self.registry.resolve_expr(operator)?.evaluate(left, right))
    }

    /// Compile queries into a reusable selector
    pub fn selector(&self, queries: impl IntoIterator<Item = MetaQuery>) -> RegistryResult<MetaSelector> {
        MetaSelector::compile(&self.registry, queries)
    }

    /// Candidates matching every query, in input order
    pub fn select<'a>(
        &self,
        queries: impl IntoIterator<Item = MetaQuery>,
        candidates: &'a [Candidate],
    ) -> RegistryResult<Vec<&'a Candidate>> {
        let selector = self.selector(queries)?;
        Ok(candidates.iter().filter(|candidate| selector.matches(candidate)).collect())
    }
}

//! Operator registry
//!
//! Maps operator identifiers to factories producing [`Predicate`]s. The table
//! is built once at startup; resolution composes combinators around their
//! resolved operands, so the returned predicate is reused across operand
//! pairs without further lookups.

use crate::config::RegistryConfig;
use crate::error::{RegistryError, RegistryResult};
use crate::evaluator::Evaluator;
use crate::expr::OperatorExpr;
use crate::operators::Comparison;
use crate::predicate::Predicate;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parking_lot::{RwLock, RwLockReadGuard};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Type alias for primitive operator factories
pub type PredicateFactory = Arc<dyn Fn() -> Predicate + Send + Sync>;

/// Type alias for combinators wrapping one predicate
pub type UnaryCombinatorFn = Arc<dyn Fn(Predicate) -> Predicate + Send + Sync>;

/// Type alias for combinators wrapping two predicates
pub type BinaryCombinatorFn = Arc<dyn Fn(Predicate, Predicate) -> Predicate + Send + Sync>;

static STANDARD_REGISTRY: Lazy<OperatorRegistry> = Lazy::new(OperatorRegistry::with_standard_operators);

/// Operator family, used for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorCategory {
    Comparison,
    Size,
    Logical,
    Custom,
}

impl fmt::Display for OperatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison => write!(f, "comparison"),
            Self::Size => write!(f, "size"),
            Self::Logical => write!(f, "logical"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// How an identifier produces a predicate
#[derive(Clone)]
pub enum OperatorBinding {
    /// Standalone evaluator
    Primitive(PredicateFactory),
    /// Combinator over one operand expression
    Unary(UnaryCombinatorFn),
    /// Combinator over two operand expressions
    Binary(BinaryCombinatorFn),
}

impl OperatorBinding {
    /// Number of operand expressions the binding consumes
    pub fn arity(&self) -> usize {
        match self {
            Self::Primitive(_) => 0,
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }
}

#[derive(Clone)]
struct OperatorEntry {
    category: OperatorCategory,
    description: String,
    binding: OperatorBinding,
}

/// Listing information for a registered operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorInfo {
    /// Canonical identifier
    pub identifier: String,
    /// Operator family
    pub category: OperatorCategory,
    /// Operand expressions consumed (0 for primitives)
    pub arity: usize,
    /// Human-readable description
    pub description: String,
    /// Aliases resolving to this identifier
    pub aliases: Vec<String>,
}

/// Registry of operator identifiers
#[derive(Clone, Default)]
pub struct OperatorRegistry {
    operators: IndexMap<String, OperatorEntry>,
    aliases: IndexMap<String, String>,
}

impl OperatorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with all standard operators registered
    pub fn with_standard_operators() -> Self {
        let mut registry = Self::new();
        registry.register_standard_operators();
        registry
    }

    /// Process-wide registry holding the standard operators
    pub fn standard() -> &'static OperatorRegistry {
        &STANDARD_REGISTRY
    }

    /// Build a registry from the standard table, then apply `config`
    pub fn from_config(config: &RegistryConfig) -> RegistryResult<Self> {
        let mut registry = Self::with_standard_operators();

        for identifier in &config.disabled {
            if !registry.unregister(identifier) {
                return Err(RegistryError::unknown_operator(identifier));
            }
            log::debug!("disabled operator {}", identifier);
        }

        for (alias, target) in &config.aliases {
            registry.add_alias(alias, target)?;
        }

        log::debug!(
            "built operator registry: {} operators, {} aliases",
            registry.operators.len(),
            registry.aliases.len()
        );
        Ok(registry)
    }

    /// Register all standard operators.
    ///
    /// Replaces existing bindings with the same identifiers.
    pub fn register_standard_operators(&mut self) {
        for relation in Comparison::ALL {
            self.insert(
                relation.suffix(),
                OperatorCategory::Comparison,
                format!("left {} right, numeric operands", relation.symbol()),
                OperatorBinding::Primitive(Arc::new(move || Predicate::Order(relation))),
            );
        }

        for relation in Comparison::ALL {
            self.insert(
                format!("size_{}", relation.suffix()),
                OperatorCategory::Size,
                format!("size(left) {} right, text or sequence left operand", relation.symbol()),
                OperatorBinding::Primitive(Arc::new(move || Predicate::Size(relation))),
            );
        }

        self.insert(
            "not",
            OperatorCategory::Logical,
            "inverts the verdict of its operand",
            OperatorBinding::Unary(Arc::new(Predicate::negate)),
        );
        self.insert(
            "and",
            OperatorCategory::Logical,
            "both operands hold",
            OperatorBinding::Binary(Arc::new(Predicate::and)),
        );
        self.insert(
            "or",
            OperatorCategory::Logical,
            "either operand holds",
            OperatorBinding::Binary(Arc::new(Predicate::or)),
        );

        log::debug!("registered {} standard operators", self.operators.len());
    }

    fn insert(
        &mut self,
        identifier: impl Into<String>,
        category: OperatorCategory,
        description: impl Into<String>,
        binding: OperatorBinding,
    ) {
        self.operators.insert(
            identifier.into(),
            OperatorEntry {
                category,
                description: description.into(),
                binding,
            },
        );
    }

    fn ensure_free(&self, identifier: &str) -> RegistryResult<()> {
        if self.operators.contains_key(identifier) || self.aliases.contains_key(identifier) {
            return Err(RegistryError::duplicate_operator(identifier));
        }
        Ok(())
    }

    /// Register an operator binding under a new identifier
    pub fn register(
        &mut self,
        identifier: impl Into<String>,
        category: OperatorCategory,
        description: impl Into<String>,
        binding: OperatorBinding,
    ) -> RegistryResult<()> {
        let identifier = identifier.into();
        self.ensure_free(&identifier)?;
        log::debug!("registered {} operator {}", category, identifier);
        self.insert(identifier, category, description, binding);
        Ok(())
    }

    /// Register a caller-supplied evaluator under a new identifier
    pub fn register_evaluator(
        &mut self,
        identifier: impl Into<String>,
        description: impl Into<String>,
        evaluator: Arc<dyn Evaluator>,
    ) -> RegistryResult<()> {
        let identifier = identifier.into();
        let name = identifier.clone();
        let factory: PredicateFactory =
            Arc::new(move || Predicate::custom(name.clone(), Arc::clone(&evaluator)));
        self.register(
            identifier,
            OperatorCategory::Custom,
            description,
            OperatorBinding::Primitive(factory),
        )
    }

    /// Make `alias` resolve to the same operator as `target`
    pub fn add_alias(&mut self, alias: impl Into<String>, target: &str) -> RegistryResult<()> {
        let alias = alias.into();
        let canonical = self
            .canonical(target)
            .ok_or_else(|| RegistryError::unknown_alias_target(&alias, target))?
            .to_string();
        self.ensure_free(&alias)?;
        log::debug!("alias {} -> {}", alias, canonical);
        self.aliases.insert(alias, canonical);
        Ok(())
    }

    /// Remove an operator and the aliases pointing at it.
    ///
    /// Returns `false` if the identifier was not registered.
    pub fn unregister(&mut self, identifier: &str) -> bool {
        if self.operators.shift_remove(identifier).is_none() {
            return false;
        }
        self.aliases.retain(|_, target| target.as_str() != identifier);
        true
    }

    /// Canonical identifier for an identifier or alias
    pub fn canonical<'a>(&'a self, identifier: &'a str) -> Option<&'a str> {
        if self.operators.contains_key(identifier) {
            return Some(identifier);
        }
        self.aliases.get(identifier).map(String::as_str)
    }

    /// Check if an identifier or alias is registered
    pub fn contains(&self, identifier: &str) -> bool {
        self.canonical(identifier).is_some()
    }

    /// Number of registered operators (aliases excluded)
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Check if no operator is registered
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Registered identifiers in registration order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.operators.keys().map(String::as_str)
    }

    /// Listing information for every registered operator
    pub fn operators(&self) -> Vec<OperatorInfo> {
        self.operators
            .iter()
            .map(|(identifier, entry)| OperatorInfo {
                identifier: identifier.clone(),
                category: entry.category,
                arity: entry.binding.arity(),
                description: entry.description.clone(),
                aliases: self
                    .aliases
                    .iter()
                    .filter(|(_, target)| *target == identifier)
                    .map(|(alias, _)| alias.clone())
                    .collect(),
            })
            .collect()
    }

    fn binding(&self, identifier: &str) -> RegistryResult<&OperatorBinding> {
        self.canonical(identifier)
            .and_then(|canonical| self.operators.get(canonical))
            .map(|entry| &entry.binding)
            .ok_or_else(|| {
                log::debug!("unknown operator {}", identifier);
                RegistryError::unknown_operator(identifier)
            })
    }

    /// Resolve a plain identifier to a predicate.
    ///
    /// Combinator identifiers need operand expressions; use
    /// [`resolve_expr`](Self::resolve_expr) for those.
    pub fn resolve(&self, identifier: &str) -> RegistryResult<Predicate> {
        match self.binding(identifier)? {
            OperatorBinding::Primitive(factory) => Ok(factory()),
            binding => Err(RegistryError::arity_mismatch(identifier, binding.arity(), 0)),
        }
    }

    /// Resolve an operator expression, composing combinators around their operands
    pub fn resolve_expr(&self, expr: &OperatorExpr) -> RegistryResult<Predicate> {
        match expr {
            OperatorExpr::Named(identifier) => self.resolve(identifier),
            OperatorExpr::Apply { operator, operands } => {
                let binding = self.binding(operator)?;
                if operands.len() != binding.arity() {
                    return Err(RegistryError::arity_mismatch(
                        operator,
                        binding.arity(),
                        operands.len(),
                    ));
                }
                match (binding, operands.as_slice()) {
                    (OperatorBinding::Unary(combine), [inner]) => Ok(combine(self.resolve_expr(inner)?)),
                    (OperatorBinding::Binary(combine), [first, second]) => {
                        Ok(combine(self.resolve_expr(first)?, self.resolve_expr(second)?))
                    }
                    // Primitives have arity 0, so only an empty operand list gets here
                    (OperatorBinding::Primitive(factory), _) => Ok(factory()),
                    (binding, _) => Err(RegistryError::arity_mismatch(
                        operator,
                        binding.arity(),
                        operands.len(),
                    )),
                }
            }
        }
    }

    /// Parse the textual form (`"lt"`, `"not:lt"`) and resolve it
    pub fn resolve_str(&self, expression: &str) -> RegistryResult<Predicate> {
        self.resolve_expr(&expression.parse()?)
    }
}

impl fmt::Debug for OperatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorRegistry")
            .field("operators", &self.operators.keys().collect::<Vec<_>>())
            .field("aliases", &self.aliases)
            .finish()
    }
}

/// Registry behind a read-mostly lock, for deployments that register
/// operators after startup.
///
/// Resolution takes the read lock only; registration takes the write lock.
#[derive(Clone, Default)]
pub struct SharedOperatorRegistry {
    inner: Arc<RwLock<OperatorRegistry>>,
}

impl SharedOperatorRegistry {
    /// Wrap an existing registry
    pub fn new(registry: OperatorRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Read access to the underlying registry
    pub fn read(&self) -> RwLockReadGuard<'_, OperatorRegistry> {
        self.inner.read()
    }

    /// Resolve a plain identifier
    pub fn resolve(&self, identifier: &str) -> RegistryResult<Predicate> {
        self.inner.read().resolve(identifier)
    }

    /// Resolve an operator expression
    pub fn resolve_expr(&self, expr: &OperatorExpr) -> RegistryResult<Predicate> {
        self.inner.read().resolve_expr(expr)
    }

    /// Register a caller-supplied evaluator
    pub fn register_evaluator(
        &self,
        identifier: impl Into<String>,
        description: impl Into<String>,
        evaluator: Arc<dyn Evaluator>,
    ) -> RegistryResult<()> {
        self.inner
            .write()
            .register_evaluator(identifier, description, evaluator)
    }

    /// Add an alias
    pub fn add_alias(&self, alias: impl Into<String>, target: &str) -> RegistryResult<()> {
        self.inner.write().add_alias(alias, target)
    }

    /// Copy of the current table
    pub fn snapshot(&self) -> OperatorRegistry {
        self.inner.read().clone()
    }
}

impl From<OperatorRegistry> for SharedOperatorRegistry {
    fn from(registry: OperatorRegistry) -> Self {
        Self::new(registry)
    }
}

//! Resolved predicates
//!
//! A [`Predicate`] is the closed set of evaluator shapes the engine knows
//! about, dispatched through a single `evaluate`. Combinators own their inner
//! predicates, fixed at construction. `Custom` carries evaluators registered
//! by callers so the registry stays open for extension.

use crate::evaluator::Evaluator;
use crate::operators::{self, Comparison};
use metaprop_types::Value;
use std::fmt;
use std::ops::Not;
use std::sync::Arc;

/// A resolved evaluator, ready to be applied to any number of operand pairs
#[derive(Clone)]
pub enum Predicate {
    /// Numeric order comparison
    Order(Comparison),
    /// Size of text/sequence compared with a numeric bound
    Size(Comparison),
    /// Negation of the inner predicate
    Not(Box<Predicate>),
    /// Both predicates hold
    And(Box<Predicate>, Box<Predicate>),
    /// Either predicate holds
    Or(Box<Predicate>, Box<Predicate>),
    /// Caller-supplied evaluator registered under `name`
    Custom {
        name: String,
        evaluator: Arc<dyn Evaluator>,
    },
}

impl Predicate {
    pub fn less_than() -> Self {
        Self::Order(Comparison::Less)
    }

    pub fn greater_than() -> Self {
        Self::Order(Comparison::Greater)
    }

    pub fn less_or_equal() -> Self {
        Self::Order(Comparison::LessOrEqual)
    }

    pub fn greater_or_equal() -> Self {
        Self::Order(Comparison::GreaterOrEqual)
    }

    pub fn equal() -> Self {
        Self::Order(Comparison::Equal)
    }

    pub fn size_equal() -> Self {
        Self::Size(Comparison::Equal)
    }

    /// Wrap a caller-supplied evaluator
    pub fn custom(name: impl Into<String>, evaluator: Arc<dyn Evaluator>) -> Self {
        Self::Custom {
            name: name.into(),
            evaluator,
        }
    }

    /// Negate this predicate
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Conjunction with another predicate
    pub fn and(self, other: Predicate) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Disjunction with another predicate
    pub fn or(self, other: Predicate) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Check if this predicate is a combinator
    pub fn is_combinator(&self) -> bool {
        matches!(self, Self::Not(_) | Self::And(..) | Self::Or(..))
    }
}

impl Evaluator for Predicate {
    fn evaluate(&self, left: &Value, right: &Value) -> bool {
        match self {
            Self::Order(relation) => operators::compare_numbers(*relation, left, right),
            Self::Size(relation) => operators::compare_size(*relation, left, right),
            Self::Not(inner) => operators::eval_not(inner.as_ref(), left, right),
            Self::And(first, second) => operators::eval_and(first.as_ref(), second.as_ref(), left, right),
            Self::Or(first, second) => operators::eval_or(first.as_ref(), second.as_ref(), left, right),
            Self::Custom { evaluator, .. } => evaluator.evaluate(left, right),
        }
    }
}

impl Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Order(relation) => write!(f, "{}", relation.suffix()),
            Self::Size(relation) => write!(f, "size_{}", relation.suffix()),
            Self::Not(inner) => write!(f, "not:{}", inner),
            Self::And(first, second) => write!(f, "and({}, {})", first, second),
            Self::Or(first, second) => write!(f, "or({}, {})", first, second),
            Self::Custom { name, .. } => write!(f, "{}", name),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Order(relation) => f.debug_tuple("Order").field(relation).finish(),
            Self::Size(relation) => f.debug_tuple("Size").field(relation).finish(),
            Self::Not(inner) => f.debug_tuple("Not").field(inner).finish(),
            Self::And(first, second) => f.debug_tuple("And").field(first).field(second).finish(),
            Self::Or(first, second) => f.debug_tuple("Or").field(first).field(second).finish(),
            Self::Custom { name, .. } => f.debug_struct("Custom").field("name", name).finish_non_exhaustive(),
        }
    }
}

//! Operator implementations
//!
//! This module contains the primitive and combinator semantics:
//! - Comparison operators (lt, gt, le, ge, eq) with numeric promotion
//! - Size operators (size_eq, size_gt, ...) over text and sequences
//! - Logical combinators (not, and, or)

pub mod comparison;
pub mod logical;
pub mod size;

pub use comparison::{compare_numbers, numeric_ordering};
pub use logical::{eval_and, eval_not, eval_or};
pub use size::{compare_size, size_ordering};

use std::cmp::Ordering;
use std::fmt;

/// Relation applied to an ordering result.
///
/// Order and size operators share these relations and differ only in how
/// they obtain the ordering of their operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
    Equal,
}

impl Comparison {
    /// All relations, in registration order
    pub const ALL: [Comparison; 5] = [
        Self::Less,
        Self::Greater,
        Self::LessOrEqual,
        Self::GreaterOrEqual,
        Self::Equal,
    ];

    /// Check whether the relation holds for an ordering of `left` against `right`
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::Less => ordering == Ordering::Less,
            Self::Greater => ordering == Ordering::Greater,
            Self::LessOrEqual => ordering != Ordering::Greater,
            Self::GreaterOrEqual => ordering != Ordering::Less,
            Self::Equal => ordering == Ordering::Equal,
        }
    }

    /// Short suffix used in operator identifiers (`lt`, `ge`, ...)
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Less => "lt",
            Self::Greater => "gt",
            Self::LessOrEqual => "le",
            Self::GreaterOrEqual => "ge",
            Self::Equal => "eq",
        }
    }

    /// Mathematical symbol for the relation
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessOrEqual => "<=",
            Self::GreaterOrEqual => ">=",
            Self::Equal => "=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

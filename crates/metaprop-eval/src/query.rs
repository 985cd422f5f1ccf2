//! Metadata queries over candidate records
//!
//! A [`MetaQuery`] asks whether a named attribute of a candidate (for example
//! a service instance) stands in some relation to a literal. The attribute
//! value is the left operand, the literal the right one. Candidates lacking
//! the attribute see `Absent`, so they simply do not match.
//!
//! A [`MetaSelector`] resolves every query's operator once and then checks
//! any number of candidates; a candidate matches when all queries hold.

use crate::error::RegistryResult;
use crate::evaluator::Evaluator;
use crate::expr::OperatorExpr;
use crate::predicate::Predicate;
use crate::registry::OperatorRegistry;
use indexmap::IndexMap;
use metaprop_types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

static ABSENT: Value = Value::Absent;

/// A single attribute condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaQuery {
    /// Metadata attribute read from the candidate (left operand)
    pub attribute: String,
    /// Operator selecting the evaluator
    pub operator: OperatorExpr,
    /// Literal compared against the attribute (right operand)
    #[serde(with = "metaprop_types::plain")]
    pub value: Value,
}

impl MetaQuery {
    /// Create a new query
    pub fn new(attribute: impl Into<String>, operator: impl Into<OperatorExpr>, value: impl Into<Value>) -> Self {
        Self {
            attribute: attribute.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Resolve the operator and check a single candidate
    pub fn matches(&self, registry: &OperatorRegistry, candidate: &Candidate) -> RegistryResult<bool> {
        let predicate = registry.resolve_expr(&self.operator)?;
        Ok(predicate.evaluate(candidate.attribute(&self.attribute), &self.value))
    }
}

impl fmt::Display for MetaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.attribute, self.operator, self.value)
    }
}

/// A record carrying named metadata attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate identifier (service instance id, property owner, ...)
    pub id: String,
    /// Attribute name -> value
    #[serde(default, with = "metaprop_types::plain::map")]
    pub metadata: IndexMap<String, Value>,
}

impl Candidate {
    /// Create a candidate without metadata
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: IndexMap::new(),
        }
    }

    /// Add a metadata attribute
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(attribute.into(), value.into());
        self
    }

    /// Read an attribute; missing attributes are `Absent`
    pub fn attribute(&self, name: &str) -> &Value {
        self.metadata.get(name).unwrap_or(&ABSENT)
    }
}

/// Queries with their operators resolved
#[derive(Debug, Clone, Default)]
pub struct MetaSelector {
    clauses: Vec<(MetaQuery, Predicate)>,
}

impl MetaSelector {
    /// Resolve every query's operator against `registry`.
    ///
    /// Fails on the first unknown operator, before any candidate is checked.
    pub fn compile(registry: &OperatorRegistry, queries: impl IntoIterator<Item = MetaQuery>) -> RegistryResult<Self> {
        let clauses = queries
            .into_iter()
            .map(|query| {
                let predicate = registry.resolve_expr(&query.operator)?;
                Ok((query, predicate))
            })
            .collect::<RegistryResult<Vec<_>>>()?;
        log::trace!("compiled selector with {} clause(s)", clauses.len());
        Ok(Self { clauses })
    }

    /// Number of clauses
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Check if the selector has no clauses (matches everything)
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The queries this selector was compiled from
    pub fn queries(&self) -> impl Iterator<Item = &MetaQuery> {
        self.clauses.iter().map(|(query, _)| query)
    }

    /// Check if every clause holds for `candidate`
    pub fn matches(&self, candidate: &Candidate) -> bool {
        self.clauses
            .iter()
            .all(|(query, predicate)| predicate.evaluate(candidate.attribute(&query.attribute), &query.value))
    }

    /// Queries that do not hold for `candidate`
    pub fn mismatches<'a>(&'a self, candidate: &Candidate) -> Vec<&'a MetaQuery> {
        self.clauses
            .iter()
            .filter(|(query, predicate)| !predicate.evaluate(candidate.attribute(&query.attribute), &query.value))
            .map(|(query, _)| query)
            .collect()
    }

    /// Keep the candidates matching every clause, in input order
    pub fn filter<'a, I>(&'a self, candidates: I) -> impl Iterator<Item = &'a Candidate> + 'a
    where
        I: IntoIterator<Item = &'a Candidate>,
        I::IntoIter: 'a,
    {
        candidates.into_iter().filter(move |candidate| self.matches(candidate))
    }
}

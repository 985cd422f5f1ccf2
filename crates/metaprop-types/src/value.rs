//! Runtime values compared by predicates
//!
//! A [`Value`] is immutable once built. Evaluators only borrow values, so the
//! same operand can be checked against any number of predicates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ValueKind;

/// A classified operand.
///
/// The numeric sub-kind is preserved: `Integer(3)` and `Real(3.0)` are distinct
/// values, and ordering comparisons decide how to promote them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),
    /// Double-precision real
    Real(f64),
    /// Text value
    Text(String),
    /// Boolean value
    Boolean(bool),
    /// Ordered list of values
    Sequence(Vec<Value>),
    /// No value, or not applicable
    #[default]
    Absent,
}

impl Value {
    /// Get the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Real(_) => ValueKind::Real,
            Self::Text(_) => ValueKind::Text,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Absent => ValueKind::Absent,
        }
    }

    /// Check if this value is absent
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Check if this value is an integer or a real
    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    /// Try to get as Integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as Real, widening integers
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(r) => Some(*r),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get as Text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as Boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as Sequence
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Size of a sized value: character count of text, element count of a sequence.
    ///
    /// Returns `None` for every other kind.
    pub fn size(&self) -> Option<usize> {
        match self {
            Self::Text(s) => Some(s.chars().count()),
            Self::Sequence(items) => Some(items.len()),
            Self::Integer(_) | Self::Real(_) | Self::Boolean(_) | Self::Absent => None,
        }
    }

    /// Create a text value
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a sequence from anything convertible into values
    pub fn sequence<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            Self::Real(r) => {
                // Keep reals visibly distinct from integers
                if r.is_finite() && r.fract() == 0.0 {
                    write!(f, "{:.1}", r)
                } else {
                    write!(f, "{}", r)
                }
            }
            Self::Text(s) => write!(f, "{:?}", s),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Absent => write!(f, "absent"),
        }
    }
}

// ============================================================================
// Classification from source-typed inputs
// ============================================================================

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Real(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::sequence(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::sequence(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_sub_kind_preserved() {
        assert_eq!(Value::from(3).kind(), ValueKind::Integer);
        assert_eq!(Value::from(3.0).kind(), ValueKind::Real);
        assert_ne!(Value::from(3), Value::from(3.0));
    }

    #[test]
    fn test_size_counts_characters_not_bytes() {
        assert_eq!(Value::text("héllo").size(), Some(5));
        assert_eq!(Value::sequence([1, 2, 3]).size(), Some(3));
        assert_eq!(Value::Integer(5).size(), None);
        assert_eq!(Value::Absent.size(), None);
    }

    #[test]
    fn test_option_classification() {
        assert_eq!(Value::from(None::<i64>), Value::Absent);
        assert_eq!(Value::from(Some("x")), Value::text("x"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Real(3.0).to_string(), "3.0");
        assert_eq!(Value::Real(2.5).to_string(), "2.5");
        assert_eq!(Value::text("a").to_string(), "\"a\"");
        assert_eq!(
            Value::Sequence(vec![Value::Integer(1), Value::Absent]).to_string(),
            "[1, absent]"
        );
    }
}

//! Operator expressions
//!
//! An [`OperatorExpr`] names the evaluator a caller wants before it is
//! resolved: a plain identifier, or a combinator identifier applied to inner
//! expressions. It is not a query language; operands are never part of it.
//!
//! Accepted forms:
//! - JSON: `"lt"`, `{"not": "lt"}`, `{"and": ["gt", {"not": "lt"}]}`
//! - Text: `"lt"`, `"not:lt"`, `"not:not:size_eq"` (unary prefixes only)

use crate::error::{RegistryError, RegistryResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unresolved operator selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ExprRepr", into = "ExprRepr")]
pub enum OperatorExpr {
    /// A registered identifier
    Named(String),
    /// A combinator identifier applied to operand expressions
    Apply {
        operator: String,
        operands: Vec<OperatorExpr>,
    },
}

impl OperatorExpr {
    /// Create a plain identifier expression
    pub fn named(identifier: impl Into<String>) -> Self {
        Self::Named(identifier.into())
    }

    /// Apply a combinator identifier to operand expressions
    pub fn apply(operator: impl Into<String>, operands: Vec<OperatorExpr>) -> Self {
        Self::Apply {
            operator: operator.into(),
            operands,
        }
    }

    /// `not` applied to `inner`
    pub fn not(inner: OperatorExpr) -> Self {
        Self::apply("not", vec![inner])
    }

    /// `and` applied to two expressions
    pub fn and(first: OperatorExpr, second: OperatorExpr) -> Self {
        Self::apply("and", vec![first, second])
    }

    /// `or` applied to two expressions
    pub fn or(first: OperatorExpr, second: OperatorExpr) -> Self {
        Self::apply("or", vec![first, second])
    }

    /// The outermost identifier of this expression
    pub fn operator(&self) -> &str {
        match self {
            Self::Named(identifier) => identifier,
            Self::Apply { operator, .. } => operator,
        }
    }
}

impl FromStr for OperatorExpr {
    type Err = RegistryError;

    fn from_str(s: &str) -> RegistryResult<Self> {
        let segments: Vec<&str> = s.split(':').map(str::trim).collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(RegistryError::invalid_expression(s, "empty operator identifier"));
        }

        // Last segment is the innermost operator, earlier ones wrap it
        let (innermost, prefixes) = segments
            .split_last()
            .ok_or_else(|| RegistryError::invalid_expression(s, "empty expression"))?;
        let expr = prefixes
            .iter()
            .rev()
            .fold(Self::named(*innermost), |inner, prefix| {
                Self::apply(*prefix, vec![inner])
            });
        Ok(expr)
    }
}

/// Reads the textual form; text that does not parse is kept as a single
/// identifier and fails at resolution.
impl From<&str> for OperatorExpr {
    fn from(expression: &str) -> Self {
        expression.parse().unwrap_or_else(|_| Self::named(expression))
    }
}

impl fmt::Display for OperatorExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(identifier) => write!(f, "{}", identifier),
            Self::Apply { operator, operands } if operands.len() == 1 => {
                write!(f, "{}:{}", operator, operands[0])
            }
            Self::Apply { operator, operands } => {
                write!(f, "{}(", operator)?;
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", operand)?;
                }
                write!(f, ")")
            }
        }
    }
}

// ============================================================================
// Serde representation
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ExprRepr {
    Named(String),
    Apply(IndexMap<String, OperandsRepr>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum OperandsRepr {
    Many(Vec<OperatorExpr>),
    One(Box<OperatorExpr>),
}

impl TryFrom<ExprRepr> for OperatorExpr {
    type Error = RegistryError;

    fn try_from(repr: ExprRepr) -> RegistryResult<Self> {
        match repr {
            ExprRepr::Named(expression) => expression.parse(),
            ExprRepr::Apply(map) => {
                let keys = map.len();
                match (map.into_iter().next(), keys) {
                    (Some((operator, operands)), 1) => {
                        let operands = match operands {
                            OperandsRepr::Many(operands) => operands,
                            OperandsRepr::One(operand) => vec![*operand],
                        };
                        Ok(Self::Apply { operator, operands })
                    }
                    _ => Err(RegistryError::invalid_expression(
                        format!("{{{} keys}}", keys),
                        "expected an object with exactly one combinator key",
                    )),
                }
            }
        }
    }
}

impl From<OperatorExpr> for ExprRepr {
    fn from(expr: OperatorExpr) -> Self {
        match expr {
            OperatorExpr::Named(identifier) => ExprRepr::Named(identifier),
            OperatorExpr::Apply { operator, mut operands } => {
                let operands = if operands.len() == 1 {
                    OperandsRepr::One(Box::new(operands.remove(0)))
                } else {
                    OperandsRepr::Many(operands)
                };
                let mut map = IndexMap::with_capacity(1);
                map.insert(operator, operands);
                ExprRepr::Apply(map)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_prefix_form() {
        let expr: OperatorExpr = "not:not:lt".parse().unwrap();
        assert_eq!(
            expr,
            OperatorExpr::not(OperatorExpr::not(OperatorExpr::named("lt")))
        );
        assert_eq!(expr.to_string(), "not:not:lt");
    }

    #[test]
    fn test_parse_rejects_empty_segments() {
        assert!(matches!(
            "not:".parse::<OperatorExpr>(),
            Err(RegistryError::InvalidExpression { .. })
        ));
        assert!("".parse::<OperatorExpr>().is_err());
    }

    #[test]
    fn test_json_forms() {
        let expr: OperatorExpr = serde_json::from_value(json!({"and": ["gt", {"not": "lt"}]})).unwrap();
        assert_eq!(
            expr,
            OperatorExpr::and(
                OperatorExpr::named("gt"),
                OperatorExpr::not(OperatorExpr::named("lt"))
            )
        );
        assert_eq!(
            serde_json::to_value(&expr).unwrap(),
            json!({"and": ["gt", {"not": "lt"}]})
        );
    }

    #[test]
    fn test_prefix_form_inside_json() {
        let expr: OperatorExpr = serde_json::from_value(json!("not:size_lt")).unwrap();
        assert_eq!(expr, OperatorExpr::not(OperatorExpr::named("size_lt")));

        let nested: OperatorExpr = serde_json::from_value(json!({"or": ["eq", "not:lt"]})).unwrap();
        assert_eq!(
            nested,
            OperatorExpr::or(
                OperatorExpr::named("eq"),
                OperatorExpr::not(OperatorExpr::named("lt"))
            )
        );
        assert!(serde_json::from_value::<OperatorExpr>(json!("not:")).is_err());
    }

    #[test]
    fn test_from_text_parses_prefixes() {
        assert_eq!(
            OperatorExpr::from("not:not:ge"),
            OperatorExpr::not(OperatorExpr::not(OperatorExpr::named("ge")))
        );
        assert_eq!(OperatorExpr::from("lt"), OperatorExpr::named("lt"));
        assert_eq!(OperatorExpr::from("not:"), OperatorExpr::named("not:"));
    }

    #[test]
    fn test_json_rejects_multiple_keys() {
        let result = serde_json::from_value::<OperatorExpr>(json!({"not": "lt", "and": []}));
        assert!(result.is_err());
    }
}

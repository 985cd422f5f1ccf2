//! Order comparison operators
//!
//! Implements: lt, gt, le, ge, eq
//!
//! Both operands must be numeric. If either operand is `Real` the pair is
//! compared as `f64` with the integer widened; otherwise the integers are
//! compared exactly. Anything else is outside the domain and yields `false`.

use super::Comparison;
use metaprop_types::Value;
use std::cmp::Ordering;

/// Order two numeric operands using the promotion rule.
///
/// Returns `None` when either operand is not numeric, or when a real operand
/// is NaN and no ordering exists.
pub fn numeric_ordering(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),

        // Any real operand promotes the pair to real comparison
        (Value::Integer(a), Value::Real(b)) => (*a as f64).partial_cmp(b),
        (Value::Real(a), Value::Integer(b)) => a.partial_cmp(&(*b as f64)),
        (Value::Real(a), Value::Real(b)) => a.partial_cmp(b),

        (
            Value::Integer(_) | Value::Real(_),
            Value::Text(_) | Value::Boolean(_) | Value::Sequence(_) | Value::Absent,
        )
        | (Value::Text(_) | Value::Boolean(_) | Value::Sequence(_) | Value::Absent, _) => None,
    }
}

/// Apply an order relation to two operands, fail-soft
pub fn compare_numbers(relation: Comparison, left: &Value, right: &Value) -> bool {
    numeric_ordering(left, right).is_some_and(|ordering| relation.holds(ordering))
}

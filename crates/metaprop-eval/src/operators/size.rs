//! Size comparison operators
//!
//! Implements: size_eq, size_gt, size_lt, size_ge, size_le
//!
//! The left operand must be `Text` (sized by character count) or `Sequence`
//! (sized by element count). The right operand is the bound and must be
//! numeric; a `Real` bound is truncated toward zero. Every other pairing
//! yields `false`.

use super::Comparison;
use metaprop_types::Value;
use std::cmp::Ordering;

/// Integral bound of a numeric right operand
fn integral_bound(bound: &Value) -> Option<i64> {
    match bound {
        Value::Integer(i) => Some(*i),
        // `as` saturates out-of-range reals
        Value::Real(r) if r.is_finite() => Some(r.trunc() as i64),
        Value::Real(_) | Value::Text(_) | Value::Boolean(_) | Value::Sequence(_) | Value::Absent => None,
    }
}

/// Order the size of `left` against the integral bound in `right`
pub fn size_ordering(left: &Value, right: &Value) -> Option<Ordering> {
    let size = match left {
        Value::Text(_) | Value::Sequence(_) => left.size()?,
        Value::Integer(_) | Value::Real(_) | Value::Boolean(_) | Value::Absent => return None,
    };
    let bound = integral_bound(right)?;
    let size = i64::try_from(size).ok()?;
    Some(size.cmp(&bound))
}

/// Apply a relation to the size of `left` and the bound in `right`, fail-soft
pub fn compare_size(relation: Comparison, left: &Value, right: &Value) -> bool {
    size_ordering(left, right).is_some_and(|ordering| relation.holds(ordering))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_bound_truncates() {
        let text = Value::text("abc");
        assert!(compare_size(Comparison::Equal, &text, &Value::Real(3.9)));
        assert!(compare_size(Comparison::Equal, &text, &Value::Real(3.0)));
        assert!(!compare_size(Comparison::Equal, &text, &Value::Real(2.9)));
    }

    #[test]
    fn test_non_finite_bound() {
        let text = Value::text("abc");
        assert_eq!(size_ordering(&text, &Value::Real(f64::INFINITY)), None);
        assert_eq!(size_ordering(&text, &Value::Real(f64::NAN)), None);
    }

    #[test]
    fn test_negative_bound_is_compared() {
        assert!(compare_size(Comparison::Greater, &Value::text(""), &Value::Integer(-1)));
        assert!(!compare_size(Comparison::Equal, &Value::text(""), &Value::Integer(-1)));
    }

    #[test]
    fn test_unsized_left_is_outside_domain() {
        assert_eq!(size_ordering(&Value::Integer(5), &Value::Integer(5)), None);
        assert_eq!(size_ordering(&Value::Boolean(true), &Value::Integer(1)), None);
        assert_eq!(size_ordering(&Value::text("x"), &Value::text("1")), None);
    }
}

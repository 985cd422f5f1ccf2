//! metaprop value model
//!
//! This crate defines the closed set of runtime values that predicates compare:
//! - `Integer` and `Real` numbers (with the sub-kind kept for promotion rules)
//! - `Text`, `Boolean` and ordered `Sequence` values
//! - `Absent` for "no value / not applicable"
//!
//! Every operand is classified into exactly one [`Value`] before it reaches an
//! evaluator. Classification never fails; unrecognised inputs become `Absent`.

mod json;
mod kind;
pub mod plain;
mod value;

pub use kind::ValueKind;
pub use value::Value;

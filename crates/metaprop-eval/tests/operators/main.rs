//! Operator integration tests
//!
//! These tests verify operator behavior including:
//! - Numeric promotion between Integer and Real operands
//! - Size computation for text and sequences
//! - Fail-soft results for operands outside an operator's domain
//! - Negation and the binary combinators

mod comparison;
mod logical;
mod size;

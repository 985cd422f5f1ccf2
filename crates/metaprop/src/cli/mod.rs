//! CLI functionality for the metaprop tool
//!
//! This module contains all CLI-related functionality including:
//! - Single predicate evaluation
//! - Candidate filtering
//! - Property validation
//! - Operator listing
//! - Configuration loading and output formatting

pub mod config;
pub mod evaluate;
pub mod filter;
pub mod operators;
pub mod output;
pub mod validate;

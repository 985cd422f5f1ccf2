//! Eval command implementation

use super::{config, output};
use anyhow::{Context, Result};
use metaprop_eval::Evaluator;
use serde_json::json;
use std::path::PathBuf;

/// Configuration for eval command
pub struct EvaluateConfig {
    pub operator: String,
    pub left: String,
    pub right: String,
    pub registry_config: Option<PathBuf>,
    pub verbose: bool,
    pub output_format: output::OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Resolve the operator and evaluate it against the two operands
pub fn evaluate(config: &EvaluateConfig) -> Result<bool> {
    let registry = config::load_registry(config.registry_config.as_deref())?;
    let predicate = registry
        .resolve_str(&config.operator)
        .with_context(|| format!("Cannot resolve operator '{}'", config.operator))?;

    let left = config::parse_operand(&config.left);
    let right = config::parse_operand(&config.right);

    if config.verbose {
        eprintln!("Resolved {} as {}", config.operator, predicate);
        eprintln!("  left:  {} ({})", left, left.kind());
        eprintln!("  right: {} ({})", right, right.kind());
    }

    Ok(predicate.evaluate(&left, &right))
}

/// Run the eval command
pub fn run(config: EvaluateConfig) -> Result<()> {
    let verdict = evaluate(&config)?;
    match config.output_format {
        output::OutputFormat::Pretty => match config.output_file.as_deref() {
            Some(path) => output::write_output(&verdict.to_string(), Some(path))?,
            None => println!("{}", output::format_verdict(verdict)),
        },
        format => {
            let report = json!({
                "operator": config.operator,
                "left": config.left,
                "right": config.right,
                "result": verdict,
            });
            // A single object renders as a one-row table
            let report = if format == output::OutputFormat::Table { json!([report]) } else { report };
            output::print_output(&report, format, config.output_file.as_deref())?;
        }
    }
    Ok(())
}

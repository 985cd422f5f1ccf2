//! Validate command implementation

use super::{config, output};
use anyhow::{Context, Result, bail};
use colored::*;
use metaprop_eval::{PropertyConstraint, ValidatorRegistry};
use metaprop_types::{Value, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for validate command
pub struct ValidateConfig {
    pub constraints: PathBuf,
    pub properties: PathBuf,
    pub registry_config: Option<PathBuf>,
    pub strict: bool,
    pub verbose: bool,
    pub output_format: output::OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// A property value to check
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyEntry {
    pub type_key: String,
    #[serde(with = "metaprop_types::plain")]
    pub value: Value,
}

/// Outcome for one property
#[derive(Debug, Clone, Serialize)]
pub struct PropertyReport {
    pub type_key: String,
    #[serde(with = "metaprop_types::plain")]
    pub value: Value,
    pub kind: ValueKind,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Check every property against the declared constraints.
///
/// Properties without a validator are reported as invalid only in strict mode.
pub fn check(config: &ValidateConfig) -> Result<Vec<PropertyReport>> {
    let registry = config::load_registry(config.registry_config.as_deref())?;
    let constraints: Vec<PropertyConstraint> = config::read_json(&config.constraints)?;
    let properties: Vec<PropertyEntry> = config::read_json(&config.properties)?;

    let validators = ValidatorRegistry::from_constraints(&registry, constraints)
        .with_context(|| format!("Invalid constraint file: {}", config.constraints.display()))?;

    let reports = properties
        .into_iter()
        .map(|entry| {
            let outcome = validators.validate(&entry.type_key, &entry.value);
            let (valid, message) = match outcome {
                Ok(()) => (true, None),
                Err(error) if error.is_unknown_validator() && !config.strict => {
                    eprintln!(
                        "{}",
                        output::format_warning(&format!("no validator for {}, accepted", entry.type_key))
                    );
                    (true, Some(error.to_string()))
                }
                Err(error) => (false, Some(error.to_string())),
            };
            PropertyReport {
                kind: entry.value.kind(),
                type_key: entry.type_key,
                value: entry.value,
                valid,
                message,
            }
        })
        .collect();
    Ok(reports)
}

/// Run the validate command
pub fn run(config: ValidateConfig) -> Result<()> {
    let reports = check(&config)?;
    let failures = reports.iter().filter(|report| !report.valid).count();

    match config.output_format {
        output::OutputFormat::Pretty if config.output_file.is_none() => {
            for report in &reports {
                let status = if report.valid { "ok".green() } else { "invalid".red() };
                match (&report.message, config.verbose || !report.valid) {
                    (Some(message), true) => println!("{} {} = {}: {}", status, report.type_key, report.value, message),
                    _ => println!("{} {} = {}", status, report.type_key, report.value),
                }
            }
        }
        format => {
            let value = serde_json::to_value(&reports).context("Failed to serialize validation report")?;
            output::print_output(&value, format, config.output_file.as_deref())?;
        }
    }

    if failures > 0 {
        bail!("{} of {} propert(ies) failed validation", failures, reports.len());
    }
    Ok(())
}

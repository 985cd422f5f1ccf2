//! Filter command implementation

use super::{config, output};
use anyhow::{Context, Result};
use metaprop_eval::{Candidate, MetaQuery, MetaSelector};
use serde_json::json;
use std::path::PathBuf;

/// Configuration for filter command
pub struct FilterConfig {
    pub queries: PathBuf,
    pub candidates: PathBuf,
    pub registry_config: Option<PathBuf>,
    pub verbose: bool,
    pub output_format: output::OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Identifiers of the candidates matching every query, in file order
pub fn select(config: &FilterConfig) -> Result<Vec<String>> {
    let registry = config::load_registry(config.registry_config.as_deref())?;
    let queries: Vec<MetaQuery> = config::read_json(&config.queries)?;
    let candidates: Vec<Candidate> = config::read_json(&config.candidates)?;

    let selector = MetaSelector::compile(&registry, queries)
        .with_context(|| format!("Invalid query file: {}", config.queries.display()))?;

    if config.verbose {
        eprintln!(
            "Checking {} candidate(s) against {} clause(s)",
            candidates.len(),
            selector.len()
        );
        for candidate in &candidates {
            for query in selector.mismatches(candidate) {
                eprintln!("  {} rejected by {}", candidate.id, query);
            }
        }
    }

    Ok(selector
        .filter(&candidates)
        .map(|candidate| candidate.id.clone())
        .collect())
}

/// Run the filter command
pub fn run(config: FilterConfig) -> Result<()> {
    let selected = select(&config)?;
    log::info!("{} candidate(s) selected", selected.len());

    let report = match config.output_format {
        output::OutputFormat::Table => json!(selected.iter().map(|id| json!({"id": id})).collect::<Vec<_>>()),
        _ => json!(selected),
    };
    output::print_output(&report, config.output_format, config.output_file.as_deref())
}

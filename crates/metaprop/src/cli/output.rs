//! Output formatting utilities

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::*;
use serde_json::Value;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use tabled::{builder::Builder, settings::Style};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Pretty,
    Table,
}

/// Color output preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Set up color output based on user preference
pub fn setup_colors(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => colored::control::set_override(io::stdout().is_terminal()),
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".red().bold(), error)
}

/// Format a warning for display
pub fn format_warning(warning: &str) -> String {
    format!("{} {}", "Warning:".yellow().bold(), warning)
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Format a verdict
pub fn format_verdict(verdict: bool) -> String {
    if verdict {
        "true".green().to_string()
    } else {
        "false".red().to_string()
    }
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("Output written to {}", path.display()))
        );
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Format JSON value for output
pub fn format_json(value: &Value, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value).context("Failed to serialize JSON")
    } else {
        serde_json::to_string(value).context("Failed to serialize JSON")
    }
}

/// Format an array of flat objects as a table.
///
/// Columns come from the first object; returns `None` for anything else.
pub fn format_as_table(value: &Value) -> Option<String> {
    let items = value.as_array()?;
    if items.is_empty() {
        return Some("(empty list)".to_string());
    }

    let columns: Vec<String> = items.first()?.as_object()?.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(columns.iter().cloned());
    for item in items {
        let object = item.as_object()?;
        builder.push_record(
            columns
                .iter()
                .map(|column| object.get(column).map(format_cell).unwrap_or_default()),
        );
    }

    Some(builder.build().with(Style::modern()).to_string())
}

/// Format a simple value for a table cell
fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(items) => items.iter().map(format_cell).collect::<Vec<_>>().join(", "),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

/// Render output in the specified format
pub fn render(value: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => format_json(value, false),
        OutputFormat::Pretty => format_json(value, true),
        OutputFormat::Table => match format_as_table(value) {
            Some(table) => Ok(table),
            None => format_json(value, true),
        },
    }
}

/// Print output in the specified format
pub fn print_output(value: &Value, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    let content = render(value, format)?;
    write_output(&content, output_file)
}

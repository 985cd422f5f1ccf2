//! Meta-predicate command-line interface

use anyhow::Result;
use clap::{Parser, Subcommand};
use metaprop::cli::{evaluate, filter, operators, output, validate};
use std::path::PathBuf;

/// Meta-predicate command-line tool
#[derive(Parser)]
#[command(name = "metaprop")]
#[command(author, version, about = "Evaluate meta-predicates over metadata and properties", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t, global = true)]
    format: output::OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output
    #[arg(long, value_enum, default_value_t, global = true)]
    color: output::ColorMode,

    /// Registry configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an operator against two operands
    Eval {
        /// Operator identifier or expression (e.g. lt, not:size_gt)
        operator: String,

        /// Left operand (JSON literal, otherwise text)
        left: String,

        /// Right operand (JSON literal, otherwise text)
        right: String,
    },

    /// Select candidates whose metadata satisfies every query
    Filter {
        /// Query file (JSON array)
        #[arg(short, long)]
        queries: PathBuf,

        /// Candidate file (JSON array)
        candidates: PathBuf,
    },

    /// Validate property values against declared constraints
    Validate {
        /// Constraint file (JSON array)
        #[arg(short = 'C', long)]
        constraints: PathBuf,

        /// Property file (JSON array)
        properties: PathBuf,

        /// Treat properties without a validator as invalid
        #[arg(short, long)]
        strict: bool,
    },

    /// List registered operators
    Operators,
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(cli.color);

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Eval { operator, left, right } => evaluate::run(evaluate::EvaluateConfig {
            operator,
            left,
            right,
            registry_config: cli.config,
            verbose: cli.verbose,
            output_format: cli.format,
            output_file: cli.output,
        }),

        Commands::Filter { queries, candidates } => filter::run(filter::FilterConfig {
            queries,
            candidates,
            registry_config: cli.config,
            verbose: cli.verbose,
            output_format: cli.format,
            output_file: cli.output,
        }),

        Commands::Validate {
            constraints,
            properties,
            strict,
        } => validate::run(validate::ValidateConfig {
            constraints,
            properties,
            registry_config: cli.config,
            strict,
            verbose: cli.verbose,
            output_format: cli.format,
            output_file: cli.output,
        }),

        Commands::Operators => operators::run(operators::OperatorsConfig {
            registry_config: cli.config,
            output_format: cli.format,
            output_file: cli.output,
        }),
    }
}

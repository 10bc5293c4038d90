//! Descent CLI - Command Line Front End for the Iterative Solvers
//!
//! # Commands
//!
//! - `descent demo` - Recover a known solution of the banded test system
//! - `descent solve --method <gd|cg>` - Solve the banded system and print a report
//! - `descent compare` - Run both methods on the same system side by side
//! - `descent check` - Inspect the test matrix and the effective configuration
//!
//! # Architecture
//!
//! As the **S**ervice layer of the workspace, this crate only wires
//! configuration, logging and output around `descent_core`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use descent_core::math::solvers::Method;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliOverrides};

/// Descent iterative linear solver CLI
#[derive(Parser)]
#[command(name = "descent")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to descent.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Matrix dimension
    #[arg(short = 'n', long, global = true)]
    size: Option<usize>,

    /// Offset of the outer band
    #[arg(short, long, global = true)]
    bandwidth: Option<usize>,

    /// Convergence tolerance on the residual norm
    #[arg(short, long, global = true)]
    tolerance: Option<f64>,

    /// Iteration budget before falling back to the initial guess
    #[arg(short, long, global = true)]
    max_iterations: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recover x = (1, ..., 1, -100) from b = A·x with conjugate gradient
    Demo,

    /// Solve the banded system and print the solve report
    Solve {
        /// Solver method (gd, cg)
        #[arg(short = 'M', long, value_parser = parse_method)]
        method: Option<Method>,

        /// Right-hand side to manufacture
        #[arg(short, long, value_enum, default_value_t = RhsKind::Demo)]
        rhs: RhsKind,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Run gradient descent and conjugate gradient on the same system
    Compare {
        /// Right-hand side to manufacture
        #[arg(short, long, value_enum, default_value_t = RhsKind::Demo)]
        rhs: RhsKind,
    },

    /// Check the test matrix and the effective configuration
    Check,
}

/// Known solution used to manufacture `b = A·x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RhsKind {
    /// All ones
    Ones,
    /// All ones with the last entry set to -100
    Demo,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

fn parse_method(s: &str) -> std::result::Result<Method, String> {
    s.parse().map_err(|e: descent_core::types::SolverError| e.to_string())
}

fn init_tracing(default_level: &str) {
    // RUST_LOG wins over the configured level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        method: match &cli.command {
            Commands::Solve { method, .. } => *method,
            _ => None,
        },
        tolerance: cli.tolerance,
        max_iterations: cli.max_iterations,
        size: cli.size,
        bandwidth: cli.bandwidth,
        verbose: cli.verbose,
    };
    let config = build_config(cli.config.as_deref(), &overrides)?;

    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "Effective configuration");

    match cli.command {
        Commands::Demo => commands::demo::run(&config),
        Commands::Solve { rhs, format, .. } => commands::solve::run(&config, rhs, format),
        Commands::Compare { rhs } => commands::compare::run(&config, rhs),
        Commands::Check => commands::check::run(&config),
    }
}

//! CLI error types

use descent_core::types::SolverError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `descent` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias used throughout the CLI
pub type Result<T> = std::result::Result<T, CliError>;

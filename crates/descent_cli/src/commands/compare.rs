//! Compare command
//!
//! Runs every method on the same banded system and prints iterations,
//! residual norms and errors side by side.

use descent_core::math::solvers::Method;
use tracing::info;

use super::solve::{execute, SolveSummary};
use crate::config::CliConfig;
use crate::{Result, RhsKind};

/// Solve the system once per method
pub fn compare(config: &CliConfig, rhs: RhsKind) -> Result<Vec<SolveSummary>> {
    Method::ALL
        .iter()
        .map(|&method| execute(config, method, rhs))
        .collect()
}

/// Run the compare command
pub fn run(config: &CliConfig, rhs: RhsKind) -> Result<()> {
    let summaries = compare(config, rhs)?;

    println!(
        "{:<20} {:>10} {:>10} {:>14} {:>14}",
        "Method", "Converged", "Iters", "Residual", "Max error"
    );
    println!("{}", "-".repeat(72));
    for summary in &summaries {
        println!(
            "{:<20} {:>10} {:>10} {:>14.6e} {:>14.6e}",
            summary.method,
            summary.report.converged,
            summary.report.iterations,
            summary.report.residual_norm,
            summary.max_abs_error
        );
    }

    if let [gd, cg] = summaries.as_slice() {
        if gd.report.converged && cg.report.converged {
            info!(
                gradient_descent = gd.report.iterations,
                conjugate_gradient = cg.report.iterations,
                "Iteration counts"
            );
        }
    }

    Ok(())
}

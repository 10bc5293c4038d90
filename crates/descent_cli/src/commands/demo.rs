//! Demo command
//!
//! Builds the banded matrix (15×15, bandwidth 6 by default), manufactures
//! `b = A·x` for `x = (1, ..., 1, -100)` and recovers `x` with conjugate
//! gradient.

use descent_core::math::solvers::Method;
use descent_core::traits::SolveReport;
use tracing::info;

use super::{build_system, max_abs_error};
use crate::config::CliConfig;
use crate::{RhsKind, Result};

/// Outcome of the demo solve
pub struct DemoOutcome {
    pub report: SolveReport<f64>,
    pub expected: Vec<f64>,
    pub max_error: f64,
}

/// Solve the demo system without printing
pub fn execute(config: &CliConfig) -> Result<DemoOutcome> {
    info!(
        size = config.matrix.size,
        bandwidth = config.matrix.bandwidth,
        "Building banded demo system"
    );
    let system = build_system(&config.matrix, RhsKind::Demo)?;

    let report = Method::ConjugateGradient.solve(
        config.solver.solver_config(),
        &system.matrix,
        &system.rhs,
    )?;
    let max_error = max_abs_error(&report.solution, &system.expected);

    Ok(DemoOutcome {
        report,
        expected: system.expected,
        max_error,
    })
}

/// Runs the demo and prints the recovered solution
pub fn run(config: &CliConfig) -> Result<()> {
    let outcome = execute(config)?;
    let report = &outcome.report;

    println!("========================================");
    println!("Conjugate Gradient Demo");
    println!("========================================");
    println!(
        "Matrix: {}x{}, bandwidth {}",
        config.matrix.size, config.matrix.size, config.matrix.bandwidth
    );
    println!();
    println!("{:<6} {:>18} {:>18}", "i", "x", "expected");
    println!("----------------------------------------------");
    for (i, (x, e)) in report.solution.iter().zip(&outcome.expected).enumerate() {
        println!("{:<6} {:>18.10} {:>18.10}", i, x, e);
    }
    println!("----------------------------------------------");
    println!("Converged:      {}", report.converged);
    println!("Iterations:     {}", report.iterations);
    println!("Residual norm:  {:.6e}", report.residual_norm);
    println!("Max abs error:  {:.6e}", outcome.max_error);
    if let Some(message) = &report.message {
        println!("Note:           {}", message);
    }

    Ok(())
}

//! Check command
//!
//! Reports the effective configuration and the properties of the banded
//! matrix the solvers rely on: symmetry and a non-zero diagonal.

use descent_core::math::banded::build_banded_matrix;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::Result;

/// Matrix properties relevant to convergence
#[derive(Debug, PartialEq)]
pub struct MatrixCheck {
    pub size: usize,
    pub bandwidth: usize,
    pub symmetric: bool,
    pub zero_diagonal: Option<usize>,
    pub diagonally_dominant: bool,
}

/// Inspect the configured banded matrix
pub fn inspect(config: &CliConfig) -> MatrixCheck {
    let matrix = build_banded_matrix::<f64>(config.matrix.size, config.matrix.bandwidth);
    let diagonal = matrix.diagonal();

    let diagonally_dominant = (0..matrix.size()).all(|i| {
        let off: f64 = matrix
            .row(i)
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, v)| v.abs())
            .sum();
        diagonal[i].abs() >= off
    });

    MatrixCheck {
        size: matrix.size(),
        bandwidth: config.matrix.bandwidth,
        symmetric: matrix.is_symmetric(0.0),
        zero_diagonal: diagonal.iter().position(|d| *d == 0.0),
        diagonally_dominant,
    }
}

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration and test matrix");

    println!("Configuration:");
    println!("  log_level        = {}", config.log_level);
    println!("  method           = {}", config.solver.method);
    println!("  tolerance        = {:e}", config.solver.tolerance);
    println!("  max_iterations   = {}", config.solver.max_iterations);
    println!("  matrix.size      = {}", config.matrix.size);
    println!("  matrix.bandwidth = {}", config.matrix.bandwidth);

    let check = inspect(config);
    println!(
        "Matrix ({}x{}, bandwidth {}):",
        check.size, check.size, check.bandwidth
    );
    println!("  symmetric            = {}", check.symmetric);
    println!("  diagonally dominant  = {}", check.diagonally_dominant);
    match check.zero_diagonal {
        Some(index) => {
            warn!(index, "Zero diagonal entry");
            println!("  zero diagonal        = row {}", index);
        }
        None => println!("  zero diagonal        = none"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_default_matrix() {
        let check = inspect(&CliConfig::default());
        assert_eq!(check.size, 15);
        assert!(check.symmetric);
        assert!(check.diagonally_dominant);
        assert_eq!(check.zero_diagonal, None);
    }

    #[test]
    fn test_inspect_small_bandwidth() {
        // Bandwidth 1 overlaps the first off-diagonal
        let mut config = CliConfig::default();
        config.matrix.size = 4;
        config.matrix.bandwidth = 1;
        let check = inspect(&config);
        assert!(check.symmetric);
        assert!(check.diagonally_dominant);
    }

    #[test]
    fn test_check_run() {
        assert!(run(&CliConfig::default()).is_ok());
    }
}

//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The shared helpers
//! below build the banded test system every command works on.

pub mod check;
pub mod compare;
pub mod demo;
pub mod solve;

use descent_core::math::banded::build_banded_matrix;
use descent_core::math::linalg::DenseMatrix;

use crate::config::MatrixSettings;
use crate::{RhsKind, Result};

/// Banded system with a manufactured right-hand side
pub struct TestSystem {
    pub matrix: DenseMatrix<f64>,
    pub rhs: Vec<f64>,
    pub expected: Vec<f64>,
}

/// Known solution for the given right-hand side kind
pub fn known_solution(size: usize, kind: RhsKind) -> Vec<f64> {
    let mut x = vec![1.0; size];
    if kind == RhsKind::Demo {
        if let Some(last) = x.last_mut() {
            *last = -100.0;
        }
    }
    x
}

/// Build `A` from the matrix settings and `b = A·x` for the known solution
pub fn build_system(settings: &MatrixSettings, kind: RhsKind) -> Result<TestSystem> {
    let matrix = build_banded_matrix::<f64>(settings.size, settings.bandwidth);
    let expected = known_solution(settings.size, kind);
    let rhs = matrix.mul_vec(&expected)?;
    Ok(TestSystem {
        matrix,
        rhs,
        expected,
    })
}

/// Largest absolute elementwise difference
pub fn max_abs_error(x: &[f64], expected: &[f64]) -> f64 {
    x.iter()
        .zip(expected)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

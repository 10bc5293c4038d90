//! Linear solver trait and result types.
//!
//! This module defines the core abstractions shared by the iterative solvers:
//! - [`LinearSolver`]: Trait for solving `A·x = b`
//! - [`SolveReport`]: Solution plus convergence diagnostics
//!
//! # Example
//!
//! ```
//! use descent_core::math::linalg::DenseMatrix;
//! use descent_core::traits::{LinearSolver, SolveReport};
//! use descent_core::types::SolverError;
//!
//! // A "solver" for diagonal systems
//! struct DiagonalSolver;
//!
//! impl LinearSolver<f64> for DiagonalSolver {
//!     fn name(&self) -> &'static str {
//!         "diagonal"
//!     }
//!
//!     fn solve(
//!         &self,
//!         matrix: &DenseMatrix<f64>,
//!         rhs: &[f64],
//!     ) -> Result<SolveReport<f64>, SolverError> {
//!         let x = rhs.iter().zip(matrix.diagonal()).map(|(b, d)| b / d).collect();
//!         Ok(SolveReport::converged(x, 1, 0.0))
//!     }
//! }
//!
//! let a = DenseMatrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 4.0]]).unwrap();
//! let report = DiagonalSolver.solve(&a, &[2.0, 2.0]).unwrap();
//! assert_eq!(report.solution, vec![1.0, 0.5]);
//! ```

use crate::math::linalg::DenseMatrix;
use crate::types::SolverError;
use num_traits::Float;

/// Result of a solve.
///
/// `residual_norm` describes the returned `solution`: for a converged run it
/// is the norm that passed the tolerance test, for a fallback run it is the
/// residual norm of the initial guess.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveReport<T: Float> {
    /// Solution vector (the initial guess when not converged).
    pub solution: Vec<T>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Residual norm associated with `solution`.
    pub residual_norm: T,
    /// Whether the tolerance was met within the iteration budget.
    pub converged: bool,
    /// Optional message with convergence details.
    pub message: Option<String>,
}

impl<T: Float> SolveReport<T> {
    /// Create a converged report.
    pub fn converged(solution: Vec<T>, iterations: usize, residual_norm: T) -> Self {
        Self {
            solution,
            iterations,
            residual_norm,
            converged: true,
            message: None,
        }
    }

    /// Create a report for an exhausted iteration budget.
    pub fn not_converged(solution: Vec<T>, iterations: usize, residual_norm: T) -> Self {
        Self {
            solution,
            iterations,
            residual_norm,
            converged: false,
            message: Some(format!(
                "solution did not converge with {} iterations",
                iterations
            )),
        }
    }
}

/// Trait for solvers of `A·x = b` over dense square matrices.
///
/// Implementations borrow the system read-only and keep all iteration state
/// local to a single call.
pub trait LinearSolver<T: Float> {
    /// Short human-readable solver name.
    fn name(&self) -> &'static str;

    /// Solve `matrix · x = rhs`.
    ///
    /// # Errors
    ///
    /// Invalid input (shape, zero diagonal, configuration) and non-finite
    /// arithmetic are errors; an exhausted iteration budget is not.
    fn solve(&self, matrix: &DenseMatrix<T>, rhs: &[T]) -> Result<SolveReport<T>, SolverError>;
}

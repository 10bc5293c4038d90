//! Steepest (gradient) descent solver.

use super::{LinearSystem, SolverConfig};
use crate::math::linalg::{axpy, dot, DenseMatrix};
use crate::traits::{LinearSolver, SolveReport};
use crate::types::SolverError;
use num_traits::Float;
use tracing::{debug, trace, warn};

/// Gradient descent solver for symmetric definite systems.
///
/// Each iteration moves along the residual with the exact line-search step:
///
/// ```text
/// r = b - A·x
/// δ = r·r
/// s = δ / (r·A·r)
/// x ← x + s·r
/// ```
///
/// Convergence is tested on `sqrt(δ)` after the update, so a converged
/// result already includes the final step. When the iteration budget runs
/// out the initial guess `b ./ diag(A)` is returned, flagged as not
/// converged.
///
/// # Example
///
/// ```
/// use descent_core::math::linalg::DenseMatrix;
/// use descent_core::math::solvers::{GradientDescentSolver, SolverConfig};
/// use descent_core::traits::LinearSolver;
///
/// let a = DenseMatrix::<f64>::from_rows(vec![vec![4.0, 1.0], vec![1.0, 3.0]]).unwrap();
/// let solver = GradientDescentSolver::new(SolverConfig::default());
///
/// let report = solver.solve(&a, &[1.0, 2.0]).unwrap();
/// assert!(report.converged);
/// assert!((report.solution[0] - 1.0 / 11.0).abs() < 1e-5);
/// assert!((report.solution[1] - 7.0 / 11.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct GradientDescentSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> GradientDescentSolver<T> {
    /// Create a new gradient descent solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration (tolerance 1e-5, 200 iterations).
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    fn iterate(&self, system: LinearSystem<'_, T>) -> Result<SolveReport<T>, SolverError> {
        let initial = system.initial_guess()?;
        let mut x = initial.clone();

        for iteration in 1..=self.config.max_iterations {
            let r = system.residual(&x);
            let delta = dot(&r, &r);
            let residual_norm = delta.sqrt();

            // Zero residual: x already solves the system and r·A·r is 0/0.
            let step = if delta.is_zero() {
                T::zero()
            } else {
                delta / dot(&r, &system.apply(&r))
            };
            if !step.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "gradient descent step size is not finite at iteration {}",
                    iteration
                )));
            }

            axpy(step, &r, &mut x);
            trace!(
                iteration,
                residual_norm = residual_norm.to_f64().unwrap_or(f64::NAN),
                "gradient descent step"
            );

            if residual_norm < self.config.tolerance {
                debug!(
                    iterations = iteration,
                    residual_norm = residual_norm.to_f64().unwrap_or(f64::NAN),
                    "gradient descent converged"
                );
                return Ok(SolveReport::converged(x, iteration, residual_norm));
            }
        }

        warn!(
            "solution did not converge with {} iterations",
            self.config.max_iterations
        );
        let residual_norm = system.residual_norm(&initial);
        Ok(SolveReport::not_converged(
            initial,
            self.config.max_iterations,
            residual_norm,
        ))
    }
}

impl<T: Float> Default for GradientDescentSolver<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<T: Float> LinearSolver<T> for GradientDescentSolver<T> {
    fn name(&self) -> &'static str {
        "gradient-descent"
    }

    fn solve(&self, matrix: &DenseMatrix<T>, rhs: &[T]) -> Result<SolveReport<T>, SolverError> {
        self.config.validate()?;
        self.iterate(LinearSystem::new(matrix, rhs)?)
    }
}

/// Solve `A·x = b` by gradient descent and return only the solution.
///
/// Returns the initial guess `b ./ diag(A)` if `max_iterations` is exhausted.
///
/// # Example
///
/// ```
/// use descent_core::math::linalg::DenseMatrix;
/// use descent_core::math::solvers::gradient_descent;
///
/// let a: DenseMatrix<f64> = DenseMatrix::identity(3);
/// let x = gradient_descent(&a, &[1.0, 2.0, 3.0], 200, 1e-5).unwrap();
/// assert_eq!(x, vec![1.0, 2.0, 3.0]);
/// ```
pub fn gradient_descent<T: Float>(
    matrix: &DenseMatrix<T>,
    rhs: &[T],
    max_iterations: usize,
    tolerance: T,
) -> Result<Vec<T>, SolverError> {
    let config = SolverConfig {
        tolerance,
        max_iterations,
    };
    GradientDescentSolver::new(config)
        .solve(matrix, rhs)
        .map(|report| report.solution)
}

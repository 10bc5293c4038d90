//! Conjugate gradient solver.

use super::{LinearSystem, SolverConfig};
use crate::math::linalg::{axpy, dot, DenseMatrix};
use crate::traits::{LinearSolver, SolveReport};
use crate::types::SolverError;
use num_traits::Float;
use tracing::{info, trace, warn};

/// Conjugate gradient solver for symmetric definite systems.
///
/// Starting from `x₀ = b ./ diag(A)`, `r = b - A·x₀`, `aux = r·r` and
/// direction `v = b - A·x₀`, each iteration performs the standard recurrence:
///
/// ```text
/// z = A·v
/// s = aux / (z·v)
/// x ← x + s·v
/// r ← r - s·z
/// δ = r·r
/// m = δ / aux,  aux ← δ
/// v ← r + m·v
/// ```
///
/// The solve stops as soon as `sqrt(δ) < tolerance`. In exact arithmetic an
/// `n × n` definite system converges in at most `n` iterations. When the
/// iteration budget runs out the initial guess is returned, flagged as not
/// converged.
///
/// # Example
///
/// ```
/// use descent_core::math::linalg::DenseMatrix;
/// use descent_core::math::solvers::{ConjugateGradientSolver, SolverConfig};
/// use descent_core::traits::LinearSolver;
///
/// let a = DenseMatrix::<f64>::from_rows(vec![vec![4.0, 1.0], vec![1.0, 3.0]]).unwrap();
/// let solver = ConjugateGradientSolver::new(SolverConfig::default());
///
/// let report = solver.solve(&a, &[1.0, 2.0]).unwrap();
/// assert!(report.converged);
/// assert!(report.iterations <= 2);
/// assert!((report.solution[0] - 1.0 / 11.0).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct ConjugateGradientSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> ConjugateGradientSolver<T> {
    /// Create a new conjugate gradient solver with the given configuration.
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
        let mut r = system.residual(&x);
        let mut aux = dot(&r, &r);
        let mut v = system.residual(&x);
        let initial_norm = aux.sqrt();

        for iteration in 1..=self.config.max_iterations {
            // Zero residual: x already solves the system and the step is 0/0.
            if aux.is_zero() {
                info!(
                    iterations = iteration,
                    residual_norm = 0.0,
                    "conjugate gradient converged"
                );
                return Ok(SolveReport::converged(x, iteration, T::zero()));
            }

            let z = system.apply(&v);
            let step = aux / dot(&z, &v);
            if !step.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "conjugate gradient step size is not finite at iteration {}",
                    iteration
                )));
            }

            axpy(step, &v, &mut x);
            axpy(-step, &z, &mut r);
            let delta = dot(&r, &r);
            let residual_norm = delta.sqrt();
            trace!(
                iteration,
                residual_norm = residual_norm.to_f64().unwrap_or(f64::NAN),
                "conjugate gradient step"
            );

            if residual_norm < self.config.tolerance {
                info!(
                    iterations = iteration,
                    residual_norm = residual_norm.to_f64().unwrap_or(f64::NAN),
                    "conjugate gradient converged"
                );
                return Ok(SolveReport::converged(x, iteration, residual_norm));
            }

            let mixing = delta / aux;
            aux = delta;
            for (vi, &ri) in v.iter_mut().zip(&r) {
                *vi = ri + mixing * *vi;
            }
        }

        warn!(
            "solution did not converge with {} iterations",
            self.config.max_iterations
        );
        Ok(SolveReport::not_converged(
            initial,
            self.config.max_iterations,
            initial_norm,
        ))
    }
}

impl<T: Float> Default for ConjugateGradientSolver<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<T: Float> LinearSolver<T> for ConjugateGradientSolver<T> {
    fn name(&self) -> &'static str {
        "conjugate-gradient"
    }

    fn solve(&self, matrix: &DenseMatrix<T>, rhs: &[T]) -> Result<SolveReport<T>, SolverError> {
        self.config.validate()?;
        self.iterate(LinearSystem::new(matrix, rhs)?)
    }
}

/// Solve `A·x = b` by conjugate gradient and return only the solution.
///
/// Returns the initial guess `b ./ diag(A)` if `max_iterations` is exhausted.
///
/// # Example
///
/// ```
/// use descent_core::math::banded::build_banded_matrix;
/// use descent_core::math::solvers::conjugate_gradient;
///
/// let a = build_banded_matrix::<f64>(15, 6);
/// let b = a.mul_vec(&vec![1.0; 15]).unwrap();
/// let x = conjugate_gradient(&a, &b, 200, 1e-5).unwrap();
/// assert!(x.iter().all(|xi| (xi - 1.0).abs() < 1e-3));
/// ```
pub fn conjugate_gradient<T: Float>(
    matrix: &DenseMatrix<T>,
    rhs: &[T],
    max_iterations: usize,
    tolerance: T,
) -> Result<Vec<T>, SolverError> {
    let config = SolverConfig {
        tolerance,
        max_iterations,
    };
    ConjugateGradientSolver::new(config)
        .solve(matrix, rhs)
        .map(|report| report.solution)
}

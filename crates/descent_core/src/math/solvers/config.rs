//! Solver configuration types.

use crate::types::SolverError;
use num_traits::Float;

/// Configuration shared by the descent solvers.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use descent_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.max_iterations, 200);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-10,
///     max_iterations: 1000,
/// };
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on the residual norm.
    ///
    /// The solver stops when `‖b - A·x‖ < tolerance`.
    pub tolerance: T,

    /// Maximum number of iterations before falling back.
    ///
    /// If the solver doesn't converge within this limit it returns the
    /// initial guess `b ./ diag(A)` flagged as not converged. Zero is
    /// allowed and skips iteration entirely.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-5
    /// - `max_iterations`: 200
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-5).unwrap(),
            max_iterations: 200,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is not positive and finite.
    ///
    /// # Example
    ///
    /// ```
    /// use descent_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-8, 500);
    /// assert_eq!(config.max_iterations, 500);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(
            tolerance > T::zero() && tolerance.is_finite(),
            "tolerance must be positive"
        );
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Replace the tolerance, keeping the iteration budget.
    pub fn with_tolerance(self, tolerance: T) -> Self {
        Self { tolerance, ..self }
    }

    /// Replace the iteration budget, keeping the tolerance.
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    /// Check that the tolerance is a positive finite number.
    ///
    /// Solvers call this before iterating, so configurations built with a
    /// struct literal are checked too.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.tolerance > T::zero() && self.tolerance.is_finite()) {
            return Err(SolverError::InvalidConfig(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }
}

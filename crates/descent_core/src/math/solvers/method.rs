//! Solver method selection.

use std::fmt;
use std::str::FromStr;

use super::{ConjugateGradientSolver, GradientDescentSolver, SolverConfig};
use crate::math::linalg::DenseMatrix;
use crate::traits::{LinearSolver, SolveReport};
use crate::types::SolverError;
use num_traits::Float;

/// Iterative method used to solve a system.
///
/// # Example
///
/// ```
/// use descent_core::math::solvers::Method;
///
/// let method: Method = "cg".parse().unwrap();
/// assert_eq!(method, Method::ConjugateGradient);
/// assert_eq!(method.to_string(), "conjugate-gradient");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Method {
    /// Steepest descent along the residual.
    GradientDescent,
    /// Conjugate gradient (default).
    #[default]
    ConjugateGradient,
}

impl Method {
    /// All methods, in the order they are usually compared.
    pub const ALL: [Method; 2] = [Method::GradientDescent, Method::ConjugateGradient];

    /// Canonical kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GradientDescent => "gradient-descent",
            Method::ConjugateGradient => "conjugate-gradient",
        }
    }

    /// Solve `matrix · x = rhs` with this method.
    ///
    /// # Example
    ///
    /// ```
    /// use descent_core::math::linalg::DenseMatrix;
    /// use descent_core::math::solvers::{Method, SolverConfig};
    ///
    /// let a: DenseMatrix<f64> = DenseMatrix::identity(2);
    /// for method in Method::ALL {
    ///     let report = method.solve(SolverConfig::default(), &a, &[3.0, 4.0]).unwrap();
    ///     assert_eq!(report.solution, vec![3.0, 4.0]);
    /// }
    /// ```
    pub fn solve<T: Float>(
        &self,
        config: SolverConfig<T>,
        matrix: &DenseMatrix<T>,
        rhs: &[T],
    ) -> Result<SolveReport<T>, SolverError> {
        match self {
            Method::GradientDescent => GradientDescentSolver::new(config).solve(matrix, rhs),
            Method::ConjugateGradient => ConjugateGradientSolver::new(config).solve(matrix, rhs),
        }
    }
}

impl FromStr for Method {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gd" | "gradient" | "gradient-descent" | "gradient_descent" => {
                Ok(Method::GradientDescent)
            }
            "cg" | "conjugate" | "conjugate-gradient" | "conjugate_gradient" => {
                Ok(Method::ConjugateGradient)
            }
            other => Err(SolverError::InvalidConfig(format!(
                "unknown method '{}'. Supported: gd, cg",
                other
            ))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

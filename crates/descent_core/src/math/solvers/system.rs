//! Validated linear system shared by the solvers.

use crate::math::linalg::{dot, DenseMatrix};
use crate::types::SolverError;
use num_traits::Float;

/// Borrowed `(A, b)` pair that has passed entry validation.
///
/// Construction checks that `b` matches the matrix size and that no diagonal
/// entry is zero, so [`LinearSystem::initial_guess`] is always defined.
#[derive(Debug, Clone, Copy)]
pub struct LinearSystem<'a, T: Float> {
    matrix: &'a DenseMatrix<T>,
    rhs: &'a [T],
}

impl<'a, T: Float> LinearSystem<'a, T> {
    /// Validate and wrap `matrix · x = rhs`.
    ///
    /// # Errors
    ///
    /// * `SolverError::DimensionMismatch` - `rhs.len()` differs from the matrix size
    /// * `SolverError::ZeroDiagonal` - some `A[i][i]` is zero
    pub fn new(matrix: &'a DenseMatrix<T>, rhs: &'a [T]) -> Result<Self, SolverError> {
        if rhs.len() != matrix.size() {
            return Err(SolverError::DimensionMismatch {
                expected: matrix.size(),
                got: rhs.len(),
            });
        }
        if let Some(index) = matrix.diagonal().iter().position(|d| d.is_zero()) {
            return Err(SolverError::ZeroDiagonal { index });
        }
        Ok(Self { matrix, rhs })
    }

    /// System matrix.
    pub fn matrix(&self) -> &'a DenseMatrix<T> {
        self.matrix
    }

    /// Right-hand side.
    pub fn rhs(&self) -> &'a [T] {
        self.rhs
    }

    /// System dimension.
    pub fn size(&self) -> usize {
        self.rhs.len()
    }

    /// Initial guess `x₀ = b ./ diag(A)`.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::NumericalInstability` if any entry is not finite
    /// (e.g. a subnormal diagonal or a non-finite right-hand side).
    pub fn initial_guess(&self) -> Result<Vec<T>, SolverError> {
        let guess: Vec<T> = self
            .rhs
            .iter()
            .zip(self.matrix.diagonal())
            .map(|(&b, d)| b / d)
            .collect();
        if let Some(index) = guess.iter().position(|g| !g.is_finite()) {
            return Err(SolverError::NumericalInstability(format!(
                "initial guess is not finite at index {}",
                index
            )));
        }
        Ok(guess)
    }

    /// Product `A·v` for a vector of the system dimension.
    pub fn apply(&self, v: &[T]) -> Vec<T> {
        debug_assert_eq!(v.len(), self.size());
        self.matrix.apply(v)
    }

    /// Residual `b - A·x` for a vector of the system dimension.
    pub fn residual(&self, x: &[T]) -> Vec<T> {
        self.rhs
            .iter()
            .zip(self.apply(x))
            .map(|(&b, ax)| b - ax)
            .collect()
    }

    /// Residual norm `‖b - A·x‖`.
    pub fn residual_norm(&self, x: &[T]) -> T {
        let r = self.residual(x);
        dot(&r, &r).sqrt()
    }
}

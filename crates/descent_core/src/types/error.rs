//! Error types for structured error handling.
//!
//! Non-convergence is deliberately absent from [`SolverError`]: an exhausted
//! iteration budget is recovered inside the solvers and reported through
//! `SolveReport::converged`.

use thiserror::Error;

/// Linear solver errors.
///
/// Provides structured error handling for matrix construction and the
/// iterative solvers with descriptive context for each failure mode.
///
/// # Variants
/// - `NotSquare`: Matrix rows are ragged or the matrix is not n×n
/// - `DimensionMismatch`: Vector length differs from the matrix size
/// - `ZeroDiagonal`: A diagonal entry is zero, so the initial guess is undefined
/// - `NumericalInstability`: A step size or iterate became non-finite
/// - `InvalidConfig`: Tolerance is not a positive finite number
///
/// # Examples
/// ```
/// use descent_core::types::SolverError;
///
/// let err = SolverError::ZeroDiagonal { index: 3 };
/// assert_eq!(format!("{}", err), "Zero diagonal entry at index 3");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Matrix is not square (or has ragged rows).
    #[error("Matrix is not square: {rows} rows, {cols} columns")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Offending column count
        cols: usize,
    },

    /// Vector length does not match the matrix dimension.
    #[error("Dimension mismatch: expected length {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length (matrix size)
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Zero diagonal entry makes `b ./ diag(A)` non-finite.
    #[error("Zero diagonal entry at index {index}")]
    ZeroDiagonal {
        /// Row index of the zero entry
        index: usize,
    },

    /// Numerical instability during iteration.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Invalid solver configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

//! Dense square matrices and vector kernels.
//!
//! The solvers only need a handful of operations: matrix-vector products,
//! dot products and the diagonal. [`DenseMatrix`] stores entries row-major in
//! a single contiguous buffer.
//!
//! # Example
//!
//! ```
//! use descent_core::math::linalg::{dot, DenseMatrix};
//!
//! let a = DenseMatrix::from_rows(vec![vec![4.0, 1.0], vec![1.0, 3.0]]).unwrap();
//! let y = a.mul_vec(&[1.0, 2.0]).unwrap();
//! assert_eq!(y, vec![6.0, 7.0]);
//! assert_eq!(dot(&y, &[1.0, 1.0]), 13.0);
//! ```

use std::ops::Index;

use crate::types::SolverError;
use num_traits::Float;

/// Square matrix stored row-major.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// With the `serde` feature the matrix serialises as a list of rows and
/// deserialises through [`DenseMatrix::from_rows`], so non-square input is
/// rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<Vec<T>>",
        into = "Vec<Vec<T>>",
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub struct DenseMatrix<T: Float> {
    size: usize,
    data: Vec<T>,
}

impl<T: Float> DenseMatrix<T> {
    /// Build a matrix from a vector of rows.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::NotSquare` if any row length differs from the
    /// number of rows.
    ///
    /// # Example
    ///
    /// ```
    /// use descent_core::math::linalg::DenseMatrix;
    /// use descent_core::types::SolverError;
    ///
    /// let err = DenseMatrix::from_rows(vec![vec![1.0, 2.0]]).unwrap_err();
    /// assert_eq!(err, SolverError::NotSquare { rows: 1, cols: 2 });
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, SolverError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(SolverError::NotSquare {
                    rows: size,
                    cols: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { size, data })
    }

    /// Build an `size × size` matrix by evaluating `f(i, j)` for every entry.
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                data.push(f(i, j));
            }
        }
        Self { size, data }
    }

    /// Identity matrix of the given size.
    pub fn identity(size: usize) -> Self {
        Self::from_fn(size, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Number of rows (equal to the number of columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Diagonal entries `A[i][i]`.
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.size).map(|i| self[(i, i)]).collect()
    }

    /// Matrix-vector product `A·x`.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::DimensionMismatch` if `x.len()` differs from the
    /// matrix size.
    pub fn mul_vec(&self, x: &[T]) -> Result<Vec<T>, SolverError> {
        if x.len() != self.size {
            return Err(SolverError::DimensionMismatch {
                expected: self.size,
                got: x.len(),
            });
        }
        Ok(self.apply(x))
    }

    /// Unchecked product; callers have already validated `x.len()`.
    pub(crate) fn apply(&self, x: &[T]) -> Vec<T> {
        (0..self.size).map(|i| dot(self.row(i), x)).collect()
    }

    /// Check `|A[i][j] - A[j][i]| <= tolerance` for every pair.
    pub fn is_symmetric(&self, tolerance: T) -> bool {
        (0..self.size).all(|i| {
            (i + 1..self.size).all(|j| (self[(i, j)] - self[(j, i)]).abs() <= tolerance)
        })
    }

    /// Rows as nested vectors, for display and serialisation front ends.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.size).map(|i| self.row(i).to_vec()).collect()
    }
}

impl<T: Float> TryFrom<Vec<Vec<T>>> for DenseMatrix<T> {
    type Error = SolverError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, SolverError> {
        Self::from_rows(rows)
    }
}

impl<T: Float> From<DenseMatrix<T>> for Vec<Vec<T>> {
    fn from(matrix: DenseMatrix<T>) -> Self {
        matrix.to_rows()
    }
}

impl<T: Float> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.size && j < self.size,
            "index ({}, {}) out of range for {}x{} matrix",
            i,
            j,
            self.size,
            self.size
        );
        &self.data[i * self.size + j]
    }
}

/// Dot product of two equal-length slices.
pub fn dot<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .fold(T::zero(), |acc, (&ai, &bi)| acc + ai * bi)
}

/// Euclidean norm `sqrt(v·v)`.
pub fn norm<T: Float>(v: &[T]) -> T {
    dot(v, v).sqrt()
}

/// In-place `y ← y + alpha·x`.
#[allow(clippy::assign_op_pattern)]
pub fn axpy<T: Float>(alpha: T, x: &[T], y: &mut [T]) {
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi = *yi + alpha * xi;
    }
}

/// Residual `b - A·x`.
///
/// # Errors
///
/// Returns `SolverError::DimensionMismatch` if `x` or `b` do not match the
/// matrix size.
pub fn residual<T: Float>(a: &DenseMatrix<T>, x: &[T], b: &[T]) -> Result<Vec<T>, SolverError> {
    if b.len() != a.size() {
        return Err(SolverError::DimensionMismatch {
            expected: a.size(),
            got: b.len(),
        });
    }
    let ax = a.mul_vec(x)?;
    Ok(b.iter().zip(ax).map(|(&bi, axi)| bi - axi).collect())
}

/// Residual norm `‖b - A·x‖`.
pub fn residual_norm<T: Float>(a: &DenseMatrix<T>, x: &[T], b: &[T]) -> Result<T, SolverError> {
    residual(a, x, b).map(|r| norm(&r))
}

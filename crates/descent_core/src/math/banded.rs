//! Banded test-matrix factory.
//!
//! Generates the fixed banded pattern used by the demo and tests:
//!
//! ```text
//! A[i][j] = -2   if i == j and i is the first or last row
//!         = -4   if i == j otherwise
//!         =  1   if |i - j| == 1
//!         =  1   if |i - j| == bandwidth
//!         =  0   otherwise
//! ```
//!
//! The result is symmetric and negative definite, which the descent solvers
//! handle the same way as its positive definite negation.

use super::linalg::DenseMatrix;
use num_traits::Float;

/// Single entry of the banded pattern for an `size × size` matrix.
///
/// # Example
///
/// ```
/// use descent_core::math::banded::banded_element;
///
/// assert_eq!(banded_element::<f64>(0, 0, 15, 6), -2.0);
/// assert_eq!(banded_element::<f64>(3, 3, 15, 6), -4.0);
/// assert_eq!(banded_element::<f64>(3, 9, 15, 6), 1.0);
/// assert_eq!(banded_element::<f64>(3, 8, 15, 6), 0.0);
/// ```
pub fn banded_element<T: Float>(i: usize, j: usize, size: usize, bandwidth: usize) -> T {
    let one = T::one();
    let two = one + one;
    if i == j {
        if i == 0 || i + 1 == size {
            -two
        } else {
            -(two + two)
        }
    } else if i.abs_diff(j) == 1 || i.abs_diff(j) == bandwidth {
        one
    } else {
        T::zero()
    }
}

/// Build the `size × size` banded matrix with the given bandwidth.
///
/// # Example
///
/// ```
/// use descent_core::math::banded::build_banded_matrix;
///
/// let a = build_banded_matrix::<f64>(15, 6);
/// assert!(a.is_symmetric(0.0));
/// assert_eq!(a[(14, 14)], -2.0);
/// assert_eq!(a[(14, 8)], 1.0);
/// ```
pub fn build_banded_matrix<T: Float>(size: usize, bandwidth: usize) -> DenseMatrix<T> {
    DenseMatrix::from_fn(size, |i, j| banded_element(i, j, size, bandwidth))
}

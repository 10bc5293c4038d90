//! Numerical building blocks.
//!
//! - [`linalg`]: Dense square matrices and vector kernels
//! - [`banded`]: The fixed banded test-matrix factory
//! - [`solvers`]: Gradient descent and conjugate gradient solvers

pub mod banded;
pub mod linalg;
pub mod solvers;

//! Iterative descent solvers for `A·x = b`.
//!
//! ## Available Solvers
//!
//! - [`GradientDescentSolver`]: Steepest descent along the residual
//! - [`ConjugateGradientSolver`]: Conjugate directions, at most `n` steps in
//!   exact arithmetic
//!
//! Both start from `x₀ = b ./ diag(A)`, use the closed-form optimal step and
//! stop once the residual norm drops below the tolerance. An exhausted
//! iteration budget is not an error: the solvers log a warning and return
//! `x₀` with `converged == false`.
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance on `‖b - A·x‖` (default: 1e-5)
//! - `max_iterations`: Maximum iteration count (default: 200)
//!
//! ## Examples
//!
//! ```
//! use descent_core::math::linalg::DenseMatrix;
//! use descent_core::math::solvers::{conjugate_gradient, gradient_descent};
//!
//! let a = DenseMatrix::<f64>::from_rows(vec![
//!     vec![4.0, -1.0, 0.0],
//!     vec![-1.0, 4.0, -1.0],
//!     vec![0.0, -1.0, 4.0],
//! ])
//! .unwrap();
//! let b = [2.0, 4.0, 10.0];
//!
//! let x_gd = gradient_descent(&a, &b, 200, 1e-8).unwrap();
//! let x_cg = conjugate_gradient(&a, &b, 200, 1e-8).unwrap();
//! for (g, c) in x_gd.iter().zip(&x_cg) {
//!     assert!((g - c).abs() < 1e-6);
//! }
//! ```

mod config;
mod conjugate_gradient;
mod gradient_descent;
mod method;
mod system;

// Re-export public types at module level
pub use config::SolverConfig;
pub use conjugate_gradient::{conjugate_gradient, ConjugateGradientSolver};
pub use gradient_descent::{gradient_descent, GradientDescentSolver};
pub use method::Method;
pub use system::LinearSystem;

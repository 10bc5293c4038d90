//! # descent_core: Iterative Descent Solvers for Dense Linear Systems
//!
//! ## Core Layer Role
//!
//! descent_core is the bottom layer of the workspace, providing:
//! - Dense square matrices and vector kernels (`math::linalg`)
//! - The banded test-matrix factory (`math::banded`)
//! - Gradient descent and conjugate gradient solvers (`math::solvers`)
//! - The `LinearSolver` trait and `SolveReport` (`traits`)
//! - Error types: `SolverError` (`types::error`)
//!
//! ## Minimal Dependency Principle
//!
//! The core has no dependencies on other workspace crates and keeps its
//! external dependencies small:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - tracing: Convergence diagnostics
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use descent_core::math::banded::build_banded_matrix;
//! use descent_core::math::solvers::conjugate_gradient;
//!
//! let a = build_banded_matrix::<f64>(15, 6);
//! let mut x_true = vec![1.0; 15];
//! x_true[14] = -100.0;
//! let b = a.mul_vec(&x_true).unwrap();
//!
//! let x = conjugate_gradient(&a, &b, 200, 1e-5).unwrap();
//! for (xi, ti) in x.iter().zip(&x_true) {
//!     assert!((xi - ti).abs() < 1e-3);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SolverConfig`, `SolveReport`,
//!   `DenseMatrix` and `Method`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;

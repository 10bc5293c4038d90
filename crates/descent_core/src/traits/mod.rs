//! Solver abstractions.
//!
//! - [`solver`]: The [`LinearSolver`] trait and its [`SolveReport`] result

pub mod solver;

pub use solver::{LinearSolver, SolveReport};

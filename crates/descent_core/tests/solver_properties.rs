//! Integration tests for solver convergence properties.
//!
//! Covers convergence on diagonally dominant systems, the relative
//! efficiency of conjugate gradient, the initial-guess fallback and the
//! identity round trip.

use descent_core::math::linalg::{residual_norm, DenseMatrix};
use descent_core::math::solvers::{
    conjugate_gradient, gradient_descent, ConjugateGradientSolver, GradientDescentSolver, Method,
    SolverConfig,
};
use descent_core::traits::LinearSolver;
use proptest::prelude::*;

/// Symmetric, strictly diagonally dominant pentadiagonal matrix.
fn dominant_matrix(n: usize) -> DenseMatrix<f64> {
    DenseMatrix::from_fn(n, |i, j| match i.abs_diff(j) {
        0 => 6.0,
        1 => -1.0,
        2 => 0.5,
        _ => 0.0,
    })
}

fn initial_guess(a: &DenseMatrix<f64>, b: &[f64]) -> Vec<f64> {
    b.iter().zip(a.diagonal()).map(|(bi, d)| bi / d).collect()
}

// ============================================================================
// Convergence
// ============================================================================

#[test]
fn test_both_methods_converge_within_default_budget() {
    let a = dominant_matrix(20);
    let b: Vec<f64> = (0..20).map(|i| (i as f64 * 0.7).sin() * 10.0).collect();

    for method in Method::ALL {
        let report = method.solve(SolverConfig::default(), &a, &b).unwrap();
        assert!(report.converged, "{} did not converge", method);
        assert!(report.iterations <= 200);
        let actual = residual_norm(&a, &report.solution, &b).unwrap();
        assert!(actual < 1e-5, "{}: residual {}", method, actual);
    }
}

#[test]
fn test_conjugate_gradient_needs_no_more_iterations() {
    for n in [2, 5, 10, 30] {
        let a = dominant_matrix(n);
        let b: Vec<f64> = (0..n).map(|i| 1.0 + i as f64).collect();

        let gd = GradientDescentSolver::with_defaults().solve(&a, &b).unwrap();
        let cg = ConjugateGradientSolver::with_defaults().solve(&a, &b).unwrap();

        assert!(gd.converged && cg.converged);
        assert!(
            cg.iterations <= gd.iterations,
            "n = {}: cg {} vs gd {}",
            n,
            cg.iterations,
            gd.iterations
        );
    }
}

#[test]
fn test_free_functions_agree() {
    let a = dominant_matrix(8);
    let b = vec![1.0, -1.0, 2.0, -2.0, 3.0, -3.0, 4.0, -4.0];

    let x_gd = gradient_descent(&a, &b, 200, 1e-10).unwrap();
    let x_cg = conjugate_gradient(&a, &b, 200, 1e-10).unwrap();
    for (g, c) in x_gd.iter().zip(&x_cg) {
        assert!((g - c).abs() < 1e-8, "{} vs {}", g, c);
    }
}

// ============================================================================
// Fallback and trivial systems
// ============================================================================

#[test]
fn test_tiny_budget_returns_initial_guess() {
    let a = dominant_matrix(6);
    let b = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
    let expected = initial_guess(&a, &b);

    for max_iterations in [0, 1] {
        assert_eq!(
            gradient_descent(&a, &b, max_iterations, 1e-5).unwrap(),
            expected
        );
        assert_eq!(
            conjugate_gradient(&a, &b, max_iterations, 1e-5).unwrap(),
            expected
        );
    }
}

#[test]
fn test_unreachable_tolerance_returns_initial_guess() {
    let a = dominant_matrix(6);
    let b = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
    let config = SolverConfig::new(1e-300, 3);

    for method in Method::ALL {
        let report = method.solve(config, &a, &b).unwrap();
        assert!(!report.converged);
        assert_eq!(report.iterations, 3);
        assert_eq!(report.solution, initial_guess(&a, &b));
    }
}

#[test]
fn test_identity_round_trip() {
    let a: DenseMatrix<f64> = DenseMatrix::identity(5);
    let b = vec![0.5, -1.5, 2.5, 1e6, -3.0];

    for method in Method::ALL {
        let report = method.solve(SolverConfig::default(), &a, &b).unwrap();
        assert!(report.converged);
        assert_eq!(report.iterations, 1);
        assert_eq!(report.solution, b);
    }
}

#[test]
fn test_inputs_are_not_mutated() {
    let a = dominant_matrix(4);
    let b = vec![1.0, 2.0, 3.0, 4.0];
    let (a_before, b_before) = (a.clone(), b.clone());

    let _ = gradient_descent(&a, &b, 200, 1e-5).unwrap();
    let _ = conjugate_gradient(&a, &b, 200, 1e-5).unwrap();
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_concurrent_solves() {
    let a = dominant_matrix(12);
    let handles: Vec<_> = (0..4)
        .map(|k| {
            let a = a.clone();
            std::thread::spawn(move || {
                let b: Vec<f64> = (0..12).map(|i| (i + k) as f64).collect();
                let x = conjugate_gradient(&a, &b, 200, 1e-8).unwrap();
                residual_norm(&a, &x, &b).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap() < 1e-8);
    }
}

// ============================================================================
// Property-based tests
// ============================================================================

proptest! {
    #[test]
    fn prop_both_methods_converge(
        b in prop::collection::vec(-100.0_f64..100.0, 1..16)
    ) {
        let a = dominant_matrix(b.len());
        for method in Method::ALL {
            let report = method.solve(SolverConfig::default(), &a, &b).unwrap();
            prop_assert!(report.converged);
            prop_assert!(report.residual_norm < 1e-5);
            let actual = residual_norm(&a, &report.solution, &b).unwrap();
            prop_assert!(actual < 1e-4, "{}: residual {}", method, actual);
        }
    }

    #[test]
    fn prop_zero_budget_is_initial_guess(
        b in prop::collection::vec(-100.0_f64..100.0, 1..16)
    ) {
        let a = dominant_matrix(b.len());
        let expected = initial_guess(&a, &b);
        prop_assert_eq!(gradient_descent(&a, &b, 0, 1e-5).unwrap(), expected.clone());
        prop_assert_eq!(conjugate_gradient(&a, &b, 0, 1e-5).unwrap(), expected);
    }
}

//! Criterion benchmarks for the descent solvers.
//!
//! Measures gradient descent and conjugate gradient on the banded test
//! matrix across sizes to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use descent_core::math::banded::build_banded_matrix;
use descent_core::math::linalg::DenseMatrix;
use descent_core::math::solvers::{Method, SolverConfig};

/// Right-hand side manufactured from the all-ones solution.
fn generate_system(n: usize) -> (DenseMatrix<f64>, Vec<f64>) {
    let a = build_banded_matrix::<f64>(n, (n / 3).max(2));
    let b = a.mul_vec(&vec![1.0; n]).unwrap();
    (a, b)
}

/// Benchmark both methods with a generous iteration budget.
fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("descent_solvers");
    let config = SolverConfig::new(1e-8, 5000);

    for size in [15, 50, 150] {
        let (a, b) = generate_system(size);

        for method in Method::ALL {
            group.bench_with_input(
                BenchmarkId::new(method.as_str(), size),
                &(&a, &b),
                |bench, (a, b)| {
                    bench.iter(|| {
                        method
                            .solve(config, black_box(*a), black_box(b.as_slice()))
                            .unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark matrix construction.
fn bench_banded_factory(c: &mut Criterion) {
    let mut group = c.benchmark_group("banded_factory");

    for size in [15, 150, 500] {
        group.bench_with_input(BenchmarkId::new("build", size), &size, |bench, &size| {
            bench.iter(|| build_banded_matrix::<f64>(black_box(size), 6));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solvers, bench_banded_factory);
criterion_main!(benches);

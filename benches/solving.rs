//! Benchmarks for the min-conflicts queens solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use queens_solver::{SolverParams, solve};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Benchmark a complete solve at the classic board size.
fn bench_solve_n8(c: &mut Criterion) {
    let params = SolverParams::default();
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    c.bench_function("solve_n8", |b| {
        b.iter(|| black_box(solve(8, &mut rng, &params)))
    });
}

/// Benchmark a complete solve on a mid-size board.
fn bench_solve_n32(c: &mut Criterion) {
    let params = SolverParams::default();
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    c.bench_function("solve_n32", |b| {
        b.iter(|| black_box(solve(32, &mut rng, &params)))
    });
}

/// Benchmark a complete solve near the upper size bound.
fn bench_solve_n128(c: &mut Criterion) {
    let params = SolverParams::default();
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    let mut group = c.benchmark_group("large");
    group.sample_size(10);
    group.bench_function("solve_n128", |b| {
        b.iter(|| black_box(solve(128, &mut rng, &params)))
    });
    group.finish();
}

criterion_group!(benches, bench_solve_n8, bench_solve_n32, bench_solve_n128);
criterion_main!(benches);

//! Criterion benchmarks for the 2^N activation-pattern enumeration.
//!
//! Five sources (32 patterns) is the fixture the engine is expected to
//! handle interactively; both traversals are measured so a regression in
//! either one is visible.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pd_core::{noisy_max_mixture_iterative, noisy_max_mixture_recursive, Distribution};

fn five_source_fixture() -> (Vec<f64>, Vec<Distribution>) {
    let probs = vec![0.1, 0.2, 0.3, 0.4, 0.5];
    let dists = vec![
        Distribution::from_pairs([(0, 0.2), (1, 0.8)]),
        Distribution::from_pairs([(1, 0.3), (3, 0.7)]),
        Distribution::from_pairs([(0, 0.2), (1, 0.7), (2, 0.1)]),
        Distribution::from_pairs([(0, 0.15), (1, 0.8), (2, 0.05)]),
        Distribution::from_pairs([(1, 0.4), (3, 0.6)]),
    ];
    (probs, dists)
}

fn bench_noisy_max_mixture(c: &mut Criterion) {
    let (probs, dists) = five_source_fixture();

    let mut group = c.benchmark_group("noisy_max_mixture");

    group.bench_function("recursive", |b| {
        b.iter(|| noisy_max_mixture_recursive(black_box(&probs), black_box(&dists)))
    });

    group.bench_function("iterative", |b| {
        b.iter(|| noisy_max_mixture_iterative(black_box(&probs), black_box(&dists)))
    });

    group.finish();
}

criterion_group!(benches, bench_noisy_max_mixture);
criterion_main!(benches);

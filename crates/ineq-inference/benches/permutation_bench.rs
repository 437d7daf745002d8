use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ineq_core::NeighborRelation;
use ineq_inference::GiniSpatial;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Log-normal-ish incomes with a mild regime gradient.
fn generate_incomes(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..size)
        .map(|i| {
            let base = 10.0 + (i / (size / 4).max(1)) as f64 * 5.0;
            base * (1.0 + rng.gen::<f64>())
        })
        .collect()
}

fn regime_labels(size: usize, regimes: usize) -> Vec<usize> {
    (0..size).map(|i| i % regimes).collect()
}

fn bench_spatial_gini(c: &mut Criterion) {
    let mut group = c.benchmark_group("GiniSpatial");
    for &size in &[32, 64, 128] {
        let incomes = generate_incomes(size, 42);
        let w = NeighborRelation::block(&regime_labels(size, 8)).unwrap();
        let gs = GiniSpatial::new().with_permutations(99).with_seed(42);

        group.bench_with_input(
            BenchmarkId::new("permutations_99", size),
            &incomes,
            |b, incomes| b.iter(|| gs.compute(black_box(incomes), &w).unwrap()),
        );
    }
    group.finish();
}

fn bench_sad_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_sad");
    for &size in &[100, 1000, 10000] {
        let incomes = generate_incomes(size, 7);
        group.bench_with_input(BenchmarkId::from_parameter(size), &incomes, |b, incomes| {
            b.iter(|| ineq_core::total_sad(black_box(incomes)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_spatial_gini, bench_sad_kernel);
criterion_main!(benches);

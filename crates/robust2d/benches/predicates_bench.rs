//! Criterion benchmarks for the staged predicates.
//!
//! Random inputs almost always resolve at the fast floating-point stage;
//! single-ulp perturbations of degenerate configurations force the full
//! expansion arithmetic, which is the interesting cost to track.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::{vector, Vector2};
use rand::{rngs::StdRng, Rng, SeedableRng};
use robust2d::{cocircular, parallelogram};

fn random_points(count: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| vector![rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)])
        .collect()
}

/// Points one ulp away from a collinear triple, paired with a far anchor.
fn near_collinear(seed: u64) -> [Vector2<f64>; 4] {
    let mut rng = StdRng::seed_from_u64(seed);
    let ulp = 2f64.powi(-52);
    let nudge = rng.gen_range(-4i32..=4) as f64 * ulp;
    [
        vector![0.5 + nudge, 0.5 + nudge],
        vector![12.0, 12.0],
        vector![0.5, 0.5],
        vector![24.0, 24.0],
    ]
}

fn near_cocircular(seed: u64) -> [Vector2<f64>; 4] {
    let mut rng = StdRng::seed_from_u64(seed);
    let ulp = 2f64.powi(-52);
    let nudge = rng.gen_range(-4i32..=4) as f64 * ulp;
    [
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 2.0],
        vector![nudge, 2.0 + nudge],
    ]
}

fn bench_signed_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("signed_area");

    let points = random_points(4, 43);
    group.bench_with_input(BenchmarkId::new("stage", "fast"), &points, |b, points| {
        b.iter(|| parallelogram::signed_area(points[0], points[1], points[2], points[3]))
    });

    let points = near_collinear(44);
    group.bench_with_input(
        BenchmarkId::new("stage", "escalated"),
        &points,
        |b, points| {
            b.iter(|| parallelogram::signed_area(points[0], points[1], points[2], points[3]))
        },
    );
    group.finish();
}

fn bench_cocircular(c: &mut Criterion) {
    let mut group = c.benchmark_group("cocircular");

    let points = random_points(4, 45);
    group.bench_with_input(BenchmarkId::new("stage", "fast"), &points, |b, points| {
        b.iter(|| cocircular::determinant(points[0], points[1], points[2], points[3]))
    });

    let points = near_cocircular(46);
    group.bench_with_input(
        BenchmarkId::new("stage", "escalated"),
        &points,
        |b, points| {
            b.iter(|| cocircular::determinant(points[0], points[1], points[2], points[3]))
        },
    );
    group.finish();
}

criterion_group!(benches, bench_signed_area, bench_cocircular);
criterion_main!(benches);

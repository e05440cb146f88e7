//! Order detection benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Sampling cost against structure size and angular step
//! - Smoothing cost against bandwidth and robustness iterations
//! - End-to-end detection on noisy symmetric rings

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::Normal;
use std::f64::consts::TAU;
use std::hint::black_box;
use symmetry_order::prelude::*;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Noisy `order`-fold ring of `size` points about the z axis.
fn generate_symmetric_pair(
    size: usize,
    order: usize,
    seed: u64,
) -> (CoordinateSet, CoordinateSet, RotationAxis) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.3).unwrap();
    let axis = RotationAxis::through_origin(Point3D::new(0.0, 0.0, 1.0)).unwrap();

    let coords_a: CoordinateSet = (0..size)
        .map(|i| {
            let phi = TAU * i as f64 / size as f64;
            let radius = 10.0 + (order as f64 * phi).cos();
            Point3D::new(
                radius * phi.cos() + noise.sample(&mut rng),
                radius * phi.sin() + noise.sample(&mut rng),
                (3.0 * phi).sin() + noise.sample(&mut rng),
            )
        })
        .collect();
    let coords_b = axis.rotate(&coords_a, TAU / order as f64);
    (coords_a, coords_b, axis)
}

/// Noisy sinusoidal signal over one revolution at 1° steps.
fn generate_signal(order: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.2).unwrap();

    let angles: Vec<f64> = (0..=360).map(|k| (k as f64).to_radians()).collect();
    let metrics = angles
        .iter()
        .map(|&a| (order as f64 * a).sin() + noise.sample(&mut rng))
        .collect();
    (angles, metrics)
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    group.sample_size(30);

    for size in [50, 200, 800] {
        let (coords_a, coords_b, axis) = generate_symmetric_pair(size, 3, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("nearest_neighbor", size), &size, |b, _| {
            b.iter(|| {
                sample(
                    black_box(&coords_a),
                    black_box(&coords_b),
                    &axis,
                    1.0,
                    &NearestNeighbor,
                )
                .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("rmsd", size), &size, |b, _| {
            b.iter(|| sample(black_box(&coords_a), black_box(&coords_b), &axis, 1.0, &Rmsd).unwrap())
        });
    }

    group.finish();
}

fn bench_bandwidth(c: &mut Criterion) {
    let mut group = c.benchmark_group("bandwidth");
    group.sample_size(100);
    let (angles, metrics) = generate_signal(3, 42);

    for bandwidth in [0.05, 0.1, 0.3, 0.6] {
        group.bench_with_input(
            BenchmarkId::new("smooth", bandwidth),
            &bandwidth,
            |b, &bandwidth| {
                b.iter(|| smooth(black_box(&angles), black_box(&metrics), bandwidth, 2, 1e-12).unwrap())
            },
        );
    }

    group.finish();
}

fn bench_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterations");
    group.sample_size(100);
    let (angles, metrics) = generate_signal(4, 7);

    for iterations in [0, 1, 2, 4] {
        group.bench_with_input(
            BenchmarkId::new("smooth", iterations),
            &iterations,
            |b, &iterations| {
                b.iter(|| {
                    smooth(black_box(&angles), black_box(&metrics), 0.1, iterations, 1e-12).unwrap()
                })
            },
        );
    }

    group.finish();
}

fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");
    group.sample_size(20);
    let detector = PeakCountingDetector::new(DetectorConfig::default());

    for order in [2, 3, 5] {
        let (coords_a, coords_b, axis) = generate_symmetric_pair(200, order, 11);

        group.bench_with_input(BenchmarkId::new("peak_counting", order), &order, |b, _| {
            b.iter(|| detector.calculate_order(black_box(&coords_a), black_box(&coords_b), &axis))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sampling,
    bench_bandwidth,
    bench_iterations,
    bench_detection,
);

criterion_main!(benches);

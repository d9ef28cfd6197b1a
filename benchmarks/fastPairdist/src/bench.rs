//! Pairwise distance benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (10K to 10M point pairs)
//! - Chunk size of the parallel pass
//! - Kernels on overflow-prone input
//! - Comparison with a naive allocating implementation
//!
//! For serial execution, use `FASTPAIRDIST_MODE=serial cargo bench`.
//! For parallel execution, use `FASTPAIRDIST_MODE=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastPairdist::prelude::*;
use fastPairdist_benchmarks::{
    generate_tracking_pairs, generate_uniform_pairs, generate_wide_range_pairs,
};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTPAIRDIST_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

/// Naive element-wise form with a temporary per step, as an array library
/// would evaluate `sqrt((x1-x2)**2 + (y1-y2)**2)`.
fn naive_distance(x1: &[f64], y1: &[f64], x2: &[f64], y2: &[f64]) -> Vec<f64> {
    let dx: Vec<f64> = x1.iter().zip(x2).map(|(a, b)| a - b).collect();
    let dy: Vec<f64> = y1.iter().zip(y2).map(|(a, b)| a - b).collect();
    let dx2: Vec<f64> = dx.iter().map(|d| d * d).collect();
    let dy2: Vec<f64> = dy.iter().map(|d| d * d).collect();
    dx2.iter().zip(&dy2).map(|(a, b)| (a + b).sqrt()).collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(30);

    for size in [10_000, 100_000, 1_000_000, 10_000_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (x1, y1, x2, y2) = generate_uniform_pairs(size, 42);
        let model = Distance::new().parallel(use_parallel).build().unwrap();
        let mut dist = vec![0.0; size];

        group.bench_with_input(BenchmarkId::new("compute_into", size), &size, |b, _| {
            b.iter(|| {
                model
                    .compute_into(
                        black_box(&x1),
                        black_box(&y1),
                        black_box(&x2),
                        black_box(&y2),
                        &mut dist,
                    )
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_chunk_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_size");
    group.sample_size(30);

    let size = 2_000_000;
    group.throughput(Throughput::Elements(size as u64));
    let (x1, y1, x2, y2) = generate_tracking_pairs(size, 42);
    let mut dist = vec![0.0; size];

    for chunk in [256, 4_096, 65_536, 524_288] {
        let model = Distance::new().chunk_size(chunk).build().unwrap();

        group.bench_with_input(BenchmarkId::new("parallel", chunk), &chunk, |b, _| {
            b.iter(|| {
                model
                    .compute_into(
                        black_box(&x1),
                        black_box(&y1),
                        black_box(&x2),
                        black_box(&y2),
                        &mut dist,
                    )
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_kernels(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("kernels_{}", mode_name));
    group.sample_size(30);

    let size = 1_000_000;
    group.throughput(Throughput::Elements(size as u64));
    let (x1, y1, x2, y2) = generate_wide_range_pairs(size, 42);

    for kernel in [Direct, Hypot] {
        let model = Distance::new()
            .kernel(kernel)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_function(kernel.name(), |b| {
            b.iter(|| {
                model
                    .compute(black_box(&x1), black_box(&y1), black_box(&x2), black_box(&y2))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_versus_naive(c: &mut Criterion) {
    let mut group = c.benchmark_group("versus_naive");
    group.sample_size(30);

    let size = 100_000;
    group.throughput(Throughput::Elements(size as u64));
    let (x1, y1, x2, y2) = generate_uniform_pairs(size, 42);

    group.bench_function("naive", |b| {
        b.iter(|| naive_distance(black_box(&x1), black_box(&y1), black_box(&x2), black_box(&y2)))
    });

    group.bench_function("sequential", |b| {
        b.iter(|| {
            pairdist::prelude::euclidean(
                black_box(&x1),
                black_box(&y1),
                black_box(&x2),
                black_box(&y2),
            )
            .unwrap()
        })
    });

    group.bench_function("parallel", |b| {
        b.iter(|| {
            let dist: Vec<f64> = par_euclidean(
                black_box(&x1),
                black_box(&y1),
                black_box(&x2),
                black_box(&y2),
            )
            .unwrap();
            dist
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_chunk_size,
    bench_kernels,
    bench_versus_naive,
);

criterion_main!(benches);

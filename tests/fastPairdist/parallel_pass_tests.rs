#![cfg(feature = "dev")]
//! Tests for the rayon distance pass.
//!
//! These tests drive `distance_pass_parallel` directly and compare it with
//! the sequential pass from `pairdist` across chunk sizes, including sizes
//! that do not divide the input length.

use fastPairdist::internals::engine::executor::distance_pass_parallel;
use pairdist::internals::engine::executor::distance_pass_sequential;
use pairdist::internals::math::kernel::DistanceKernel;
use pairdist::internals::primitives::points::Points;

fn make_coords(n: usize, phase: f64) -> (Vec<f64>, Vec<f64>) {
    let x = (0..n).map(|i| (i as f64 * 0.1 + phase).sin() * 1e3).collect();
    let y = (0..n).map(|i| (i as f64 * 0.2 - phase).cos() * 1e-3).collect();
    (x, y)
}

#[test]
fn test_parallel_pass_matches_sequential_for_all_chunk_sizes() {
    let n = 1237;
    let (x1, y1) = make_coords(n, 0.0);
    let (x2, y2) = make_coords(n, 1.5);
    let a = Points::new(&x1, &y1, "y1").unwrap();
    let b = Points::new(&x2, &y2, "y2").unwrap();

    for kernel in [DistanceKernel::Direct, DistanceKernel::Hypot] {
        let mut expected = vec![0.0; n];
        distance_pass_sequential(&a, &b, &mut expected, kernel);

        for chunk_size in [1, 2, 7, 64, 100, 1236, 1237, 5000] {
            let mut out = vec![-1.0; n];
            distance_pass_parallel(&a, &b, &mut out, kernel, chunk_size);
            assert_eq!(
                out, expected,
                "Mismatch for {:?} with chunk_size {}",
                kernel, chunk_size
            );
        }
    }
}

#[test]
fn test_parallel_pass_zero_chunk_size_is_clamped() {
    let (x1, y1) = make_coords(10, 0.0);
    let (x2, y2) = make_coords(10, 0.3);
    let a = Points::new(&x1, &y1, "y1").unwrap();
    let b = Points::new(&x2, &y2, "y2").unwrap();

    let mut expected = vec![0.0; 10];
    let mut out = vec![0.0; 10];
    distance_pass_sequential(&a, &b, &mut expected, DistanceKernel::Direct);
    distance_pass_parallel(&a, &b, &mut out, DistanceKernel::Direct, 0);

    assert_eq!(out, expected);
}

#[test]
fn test_parallel_pass_empty() {
    let empty: Vec<f64> = Vec::new();
    let a = Points::new(&empty, &empty, "y1").unwrap();
    let mut out: Vec<f64> = Vec::new();

    distance_pass_parallel(&a, &a, &mut out, DistanceKernel::Direct, 16);
    assert!(out.is_empty());
}

#![cfg(feature = "dev")]
//! Tests for the distance execution engine.
//!
//! These tests verify:
//! - The sequential pass writes exactly one value per pair
//! - Dispatch between the sequential pass and an injected pass
//!
//! ## Test Organization
//!
//! 1. **Sequential Pass** - Values, partial output, empty input
//! 2. **Dispatch** - Custom pass selection rules

use approx::assert_relative_eq;

use pairdist::internals::engine::executor::{
    DEFAULT_CHUNK_SIZE, DistanceConfig, DistanceExecutor, distance_pass_sequential,
};
use pairdist::internals::math::kernel::DistanceKernel;
use pairdist::internals::primitives::points::Points;

// ============================================================================
// Helper Functions
// ============================================================================

/// Pass that marks every slot with the chunk size it received.
fn marking_pass(
    _a: &Points<'_, f64>,
    _b: &Points<'_, f64>,
    out: &mut [f64],
    _kernel: DistanceKernel,
    chunk_size: usize,
) {
    out.fill(chunk_size as f64);
}

// ============================================================================
// Sequential Pass Tests
// ============================================================================

/// Test the sequential pass on a 3-4-5 triangle and its mirror images.
#[test]
fn test_sequential_pass_values() {
    let a = Points::new(&[1.0, 1.0, -1.0], &[1.0, 1.0, -1.0], "y1").unwrap();
    let b = Points::new(&[4.0, -2.0, 2.0], &[5.0, -3.0, 3.0], "y2").unwrap();
    let mut out = [0.0; 3];

    distance_pass_sequential(&a, &b, &mut out, DistanceKernel::Direct);

    assert_eq!(out, [5.0, 5.0, 5.0]);
}

/// Test both kernels agree on ordinary magnitudes.
#[test]
fn test_sequential_pass_kernels_agree() {
    let xs: Vec<f64> = (0..100).map(|i| i as f64 * 0.3).collect();
    let ys: Vec<f64> = (0..100).map(|i| (i as f64).sqrt()).collect();
    let a = Points::new(&xs, &ys, "y1").unwrap();
    let b = Points::new(&ys, &xs, "y2").unwrap();

    let mut direct = vec![0.0; 100];
    let mut hypot = vec![0.0; 100];
    distance_pass_sequential(&a, &b, &mut direct, DistanceKernel::Direct);
    distance_pass_sequential(&a, &b, &mut hypot, DistanceKernel::Hypot);

    for (d, h) in direct.iter().zip(&hypot) {
        assert_relative_eq!(*d, *h, max_relative = 1e-14);
    }
}

/// Test that zero pairs leave the output untouched.
#[test]
fn test_sequential_pass_empty_leaves_output() {
    let empty: [f64; 0] = [];
    let a = Points::new(&empty[..], &empty[..], "y1").unwrap();
    let mut out: [f64; 0] = [];

    distance_pass_sequential(&a, &a, &mut out, DistanceKernel::Direct);
    assert!(out.is_empty());
}

// ============================================================================
// Dispatch Tests
// ============================================================================

/// Test the default configuration.
#[test]
fn test_default_config() {
    let config = DistanceConfig::<f64>::default();

    assert_eq!(config.kernel, DistanceKernel::Direct);
    assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
    assert!(config.custom_distance_pass.is_none());
    assert!(!config.parallel);
}

/// Test that the custom pass runs only when parallel is enabled.
#[test]
fn test_custom_pass_requires_parallel() {
    let a = Points::new(&[0.0], &[0.0], "y1").unwrap();
    let b = Points::new(&[3.0], &[4.0], "y2").unwrap();
    let mut out = [0.0];

    let mut config = DistanceConfig {
        chunk_size: 9,
        custom_distance_pass: Some(marking_pass as _),
        ..DistanceConfig::default()
    };

    DistanceExecutor::run_with_config(&a, &b, &mut out, &config);
    assert_eq!(out, [5.0], "Sequential pass expected without parallel");

    config.parallel = true;
    DistanceExecutor::run_with_config(&a, &b, &mut out, &config);
    assert_eq!(out, [9.0], "Custom pass expected with parallel");
}

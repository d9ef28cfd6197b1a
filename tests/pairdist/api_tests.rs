//! Tests for the high-level distance API.
//!
//! These tests verify the public entry points for:
//! - Free functions (`euclidean`, `euclidean_into`)
//! - Builder configuration and validation
//! - Geometric properties of the computed distances
//!
//! ## Test Organization
//!
//! 1. **Free Functions** - Known values, empty input, length errors
//! 2. **Geometric Properties** - Hypot agreement, symmetry, zero case
//! 3. **Builder** - Kernel choice, finiteness, duplicates, chunk size
//! 4. **Result** - Display and accessors

use approx::assert_relative_eq;

use pairdist::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Deterministic, irregular point sequences of length `n`.
fn make_points(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let x1 = (0..n).map(|i| (i as f64 * 0.37).sin() * 10.0).collect();
    let y1 = (0..n).map(|i| (i as f64 * 0.11).cos() * 3.0).collect();
    let x2 = (0..n).map(|i| i as f64 * 0.5 - 7.0).collect();
    let y2 = (0..n).map(|i| ((i * i) % 13) as f64 - 6.5).collect();
    (x1, y1, x2, y2)
}

// ============================================================================
// Free Function Tests
// ============================================================================

/// Test the reference example.
///
/// Verifies (0,0)->(3,4) is 5 and (0,0)->(1,0) is 1.
#[test]
fn test_euclidean_reference_example() {
    let dist = euclidean(&[0.0, 0.0], &[0.0, 0.0], &[3.0, 1.0], &[4.0, 0.0]).unwrap();

    assert_eq!(dist, vec![5.0, 1.0]);
}

/// Test caller-allocated output is fully overwritten.
#[test]
fn test_euclidean_into_overwrites_output() {
    let (x1, y1, x2, y2) = make_points(17);
    let mut dist = vec![-1.0; 17];

    euclidean_into(&x1, &y1, &x2, &y2, &mut dist).unwrap();

    assert!(dist.iter().all(|&d| d >= 0.0), "Every slot should be written");
}

/// Test zero-length input.
///
/// Verifies that an empty call succeeds and writes nothing.
#[test]
fn test_euclidean_into_empty_is_noop() {
    let empty: [f64; 0] = [];
    let mut dist: [f64; 0] = [];

    euclidean_into(&empty, &empty, &empty, &empty, &mut dist).unwrap();
    assert!(euclidean::<f64>(&[], &[], &[], &[]).unwrap().is_empty());
}

/// Test length mismatch between coordinate arrays.
#[test]
fn test_euclidean_mismatched_inputs() {
    let res = euclidean(&[0.0, 1.0], &[0.0, 1.0], &[0.0], &[0.0, 1.0]);

    assert_eq!(
        res,
        Err(DistanceError::MismatchedInputs {
            name: "x2",
            expected: 2,
            got: 1
        })
    );
}

/// Test output buffer of the wrong size.
///
/// Verifies that the buffer is left untouched.
#[test]
fn test_euclidean_into_mismatched_output() {
    let mut dist = [42.0; 3];
    let res = euclidean_into(&[0.0, 1.0], &[0.0, 1.0], &[2.0, 3.0], &[2.0, 3.0], &mut dist);

    assert_eq!(
        res,
        Err(DistanceError::MismatchedOutput {
            expected: 2,
            got: 3
        })
    );
    assert_eq!(dist, [42.0; 3]);
}

// ============================================================================
// Geometric Property Tests
// ============================================================================

/// Test agreement with `hypot`.
#[test]
fn test_matches_hypot() {
    let (x1, y1, x2, y2) = make_points(200);
    let dist = euclidean(&x1, &y1, &x2, &y2).unwrap();

    for i in 0..200 {
        let expected = (x2[i] - x1[i]).hypot(y2[i] - y1[i]);
        assert_relative_eq!(dist[i], expected, max_relative = 1e-14);
    }
}

/// Test symmetry.
///
/// Verifies that swapping the two point sets leaves every distance unchanged.
#[test]
fn test_symmetry() {
    let (x1, y1, x2, y2) = make_points(64);

    let forward = euclidean(&x1, &y1, &x2, &y2).unwrap();
    let backward = euclidean(&x2, &y2, &x1, &y1).unwrap();

    assert_eq!(forward, backward);
}

/// Test identical points.
#[test]
fn test_identical_points_are_zero() {
    let (x1, y1, _, _) = make_points(32);
    let dist = euclidean(&x1, &y1, &x1, &y1).unwrap();

    assert!(dist.iter().all(|&d| d == 0.0));
}

/// Test single precision input.
#[test]
fn test_f32_support() {
    let dist = euclidean(&[1.0_f32], &[1.0], &[4.0], &[5.0]).unwrap();

    assert_relative_eq!(dist[0], 5.0_f32);
}

/// Test NaN propagation.
///
/// Verifies that NaN only affects its own index when finiteness is not required.
#[test]
fn test_nan_propagates_locally() {
    let dist = euclidean(&[0.0, 0.0], &[0.0, f64::NAN], &[3.0, 3.0], &[4.0, 4.0]).unwrap();

    assert_eq!(dist[0], 5.0);
    assert!(dist[1].is_nan());
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test default builder matches the free function.
#[test]
fn test_builder_default_matches_free_function() {
    let (x1, y1, x2, y2) = make_points(50);
    let model = Distance::new().build().unwrap();

    let result = model.compute(&x1, &y1, &x2, &y2).unwrap();

    assert_eq!(result.kernel, Direct);
    assert!(!result.parallel);
    assert_eq!(result.distances, euclidean(&x1, &y1, &x2, &y2).unwrap());
}

/// Test the hypot kernel avoids overflow.
#[test]
fn test_builder_hypot_kernel_no_overflow() {
    let x2 = [1e200_f64];
    let y2 = [1e200_f64];

    let direct = Distance::new().kernel(Direct).build().unwrap();
    let hypot = Distance::new().kernel(Hypot).build().unwrap();

    let d_direct = direct.compute(&[0.0], &[0.0], &x2, &y2).unwrap();
    let d_hypot = hypot.compute(&[0.0], &[0.0], &x2, &y2).unwrap();

    assert!(d_direct.distances[0].is_infinite());
    assert_relative_eq!(
        d_hypot.distances[0],
        1e200 * std::f64::consts::SQRT_2,
        max_relative = 1e-14
    );
}

/// Test finiteness requirement.
///
/// Verifies the offending array and index are reported and nothing is written.
#[test]
fn test_builder_require_finite_rejects_infinity() {
    let model = Distance::new().require_finite(true).build().unwrap();
    let mut dist = [7.0; 3];

    let res = model.compute_into(
        &[0.0, 1.0, 2.0],
        &[0.0, 1.0, 2.0],
        &[0.0, 1.0, 2.0],
        &[0.0, 1.0, f64::INFINITY],
        &mut dist,
    );

    match res {
        Err(DistanceError::InvalidNumericValue(msg)) => assert_eq!(msg, "y2[2]=inf"),
        other => panic!("Expected InvalidNumericValue, got {:?}", other),
    }
    assert_eq!(dist, [7.0; 3]);
}

/// Test duplicate parameter detection.
#[test]
fn test_builder_duplicate_parameter() {
    let res = Distance::<f64>::new().kernel(Direct).kernel(Hypot).build();

    assert!(matches!(
        res,
        Err(DistanceError::DuplicateParameter { parameter: "kernel" })
    ));
}

/// Test chunk size bound.
#[test]
fn test_builder_zero_chunk_size() {
    let res = Distance::<f64>::new().chunk_size(0).build();

    assert!(matches!(
        res,
        Err(DistanceError::InvalidChunkSize { got: 0, min: 1 })
    ));
}

/// Test that the parallel hint without a pass stays sequential.
#[test]
fn test_builder_parallel_without_pass_is_sequential() {
    let model = Distance::<f64>::new().parallel(true).build().unwrap();

    assert!(!model.is_parallel());
    let result = model.compute(&[0.0], &[0.0], &[3.0], &[4.0]).unwrap();
    assert!(!result.parallel);
    assert_eq!(result.distances, vec![5.0]);
}

// ============================================================================
// Result Tests
// ============================================================================

/// Test result accessors.
#[test]
fn test_result_accessors() {
    let model = Distance::new().build().unwrap();
    let result = model
        .compute(&[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0], &[3.0, 6.0, f64::NAN], &[4.0, 8.0, 0.0])
        .unwrap();

    assert_eq!(result.len(), 3);
    assert!(!result.is_empty());
    assert_eq!(result.max(), Some(10.0));
    assert_eq!(result.as_ref().len(), 3);
    assert_eq!(result.into_vec().len(), 3);
}

/// Test result display.
#[test]
fn test_result_display() {
    let model = Distance::new().kernel(Hypot).build().unwrap();
    let result = model
        .compute(&[0.0, 0.0], &[0.0, 0.0], &[3.0, 1.0], &[4.0, 0.0])
        .unwrap();

    let text = format!("{}", result);
    assert!(text.contains("Point pairs: 2"));
    assert!(text.contains("Kernel:      Hypot"));
    assert!(text.contains("5.000000"));
    assert!(!text.contains("..."));
}

/// Test that long results are elided in display.
#[test]
fn test_result_display_elides_long_tables() {
    let (x1, y1, x2, y2) = make_points(25);
    let result = Distance::new().build().unwrap().compute(&x1, &y1, &x2, &y2).unwrap();

    let text = format!("{}", result);
    assert!(text.contains("Point pairs: 25"));
    assert!(text.contains("..."));
}

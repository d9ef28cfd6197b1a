//! fastPairdist Pairwise Distance Examples
//!
//! This example demonstrates:
//! - Parallel execution using `rayon`
//! - Sequential fallback
//! - `ndarray` integration
//! - The overflow-safe `Hypot` kernel

use fastPairdist::prelude::*;
use ndarray::Array1;
use std::time::Instant;

fn main() -> Result<(), DistanceError> {
    println!("{}", "=".repeat(80));
    println!("fastPairdist Pairwise Distance Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_parallel_execution()?;
    example_2_sequential_fallback()?;
    example_3_ndarray_integration()?;
    example_4_hypot_kernel()?;

    Ok(())
}

fn make_points(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let x1 = (0..n).map(|i| i as f64).collect();
    let y1 = (0..n).map(|i| (i as f64 * 0.1).sin()).collect();
    let x2 = (0..n).map(|i| i as f64 + 3.0).collect();
    let y2 = (0..n).map(|i| (i as f64 * 0.1).sin() + 4.0).collect();
    (x1, y1, x2, y2)
}

/// Example 1: Parallel Execution
/// Default mode, the rayon pass is installed by `build()`
fn example_1_parallel_execution() -> Result<(), DistanceError> {
    println!("Example 1: Parallel Execution");
    println!("{}", "-".repeat(80));

    let n = 1_000_000;
    let (x1, y1, x2, y2) = make_points(n);

    let start = Instant::now();
    let model = Distance::new()
        .chunk_size(16_384) // Pairs per work item
        .build()?;

    let result = model.compute(&x1, &y1, &x2, &y2)?;
    let duration = start.elapsed();

    println!("Processed {} point pairs in {:?}", n, duration);
    println!("Result summary:\n{}", result);

    println!();
    Ok(())
}

/// Example 2: Sequential Fallback
fn example_2_sequential_fallback() -> Result<(), DistanceError> {
    println!("Example 2: Sequential Fallback");
    println!("{}", "-".repeat(80));

    let n = 1_000_000;
    let (x1, y1, x2, y2) = make_points(n);

    let start = Instant::now();
    let model = Distance::new().parallel(false).build()?;

    let mut dist = vec![0.0; n];
    model.compute_into(&x1, &y1, &x2, &y2, &mut dist)?;
    let duration = start.elapsed();

    println!("Processed {} point pairs in {:?}", n, duration);
    println!("First distance: {}", dist[0]);

    println!();
    Ok(())
}

/// Example 3: ndarray Integration
fn example_3_ndarray_integration() -> Result<(), DistanceError> {
    println!("Example 3: ndarray Integration");
    println!("{}", "-".repeat(80));

    let x1 = Array1::linspace(0.0, 10.0, 11);
    let y1 = Array1::zeros(11);
    let x2 = Array1::zeros(11);
    let y2 = Array1::from_elem(11, 1.0);

    let result = Distance::new().build()?.compute(&x1, &y1, &x2, &y2)?;
    println!("{}", result);

    println!();
    Ok(())
}

/// Example 4: Hypot Kernel
/// Coordinates whose squares overflow `f64`
fn example_4_hypot_kernel() -> Result<(), DistanceError> {
    println!("Example 4: Hypot Kernel");
    println!("{}", "-".repeat(80));

    let zeros = vec![0.0; 2];
    let x2 = vec![3e200, 1e-200];
    let y2 = vec![4e200, 0.0];

    let direct: Vec<f64> = par_euclidean(&zeros, &zeros, &x2, &y2)?;
    let hypot = Distance::new()
        .kernel(Hypot)
        .build()?
        .compute(&zeros, &zeros, &x2, &y2)?;

    println!("Direct: {:?}", direct);
    println!("Hypot:  {:?}", hypot.distances);

    println!();
    Ok(())
}

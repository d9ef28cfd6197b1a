//! Parallel execution engine for pairwise distance passes.
//!
//! ## Purpose
//!
//! This module provides the rayon pass that `fastPairdist` injects into the
//! `pairdist` executor.
//!
//! ## Design notes
//!
//! * **Parallelism**: The output is split with `par_chunks_mut`, so each
//!   worker owns a disjoint block of output slots.
//! * **Delegation**: Each block runs the sequential pass from `pairdist`,
//!   so results are bitwise identical to the sequential path.
//!
//! ## Invariants
//!
//! * Every output index is written exactly once.
//! * Inputs no larger than one chunk never touch the thread pool.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs or configure the thread pool.

// External dependencies
use num_traits::Float;
use rayon::prelude::*;

// Export dependencies from pairdist crate
use pairdist::internals::engine::executor::distance_pass_sequential;
use pairdist::internals::math::kernel::DistanceKernel;
use pairdist::internals::primitives::points::Points;

/// Parallel distance pass.
///
/// Splits the output into blocks of `chunk_size` pairs and runs the
/// sequential pass on each block in the rayon global pool.
pub fn distance_pass_parallel<T: Float + Send + Sync>(
    a: &Points<'_, T>,
    b: &Points<'_, T>,
    out: &mut [T],
    kernel: DistanceKernel,
    chunk_size: usize,
) {
    let chunk_size = chunk_size.max(1);
    if out.len() <= chunk_size {
        distance_pass_sequential(a, b, out, kernel);
        return;
    }

    out.par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(chunk_idx, block)| {
            let start = chunk_idx * chunk_size;
            let end = start + block.len();
            distance_pass_sequential(&a.slice(start, end), &b.slice(start, end), block, kernel);
        });
}

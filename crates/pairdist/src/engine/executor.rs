//! Execution engine for pairwise distance passes.
//!
//! ## Purpose
//!
//! This module runs the distance kernel over every index of two validated
//! point sequences and writes the result into a caller-provided buffer.
//!
//! ## Design notes
//!
//! * The sequential pass is the reference implementation: no allocation,
//!   no hidden state, one write per index.
//! * Extension crates can inject their own pass (e.g. a rayon pass) through
//!   `DistanceConfig::custom_distance_pass`; the executor only dispatches.
//!
//! ## Invariants
//!
//! * Both point sequences and the output have the same length.
//! * Index `i` of the output depends only on index `i` of the inputs.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not spawn threads itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::DistanceKernel;
use crate::primitives::points::Points;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom distance pass function.
#[doc(hidden)]
pub type DistancePassFn<T> = fn(
    &Points<'_, T>, // first point sequence
    &Points<'_, T>, // second point sequence
    &mut [T],       // output distances
    DistanceKernel, // kernel
    usize,          // pairs per work item
);

/// Default number of pairs handed to one worker by a parallel pass.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one execution of the distance pass.
#[derive(Debug, Clone, Copy)]
pub struct DistanceConfig<T> {
    /// Kernel applied to every coordinate difference.
    pub kernel: DistanceKernel,

    /// Number of pairs per parallel work item.
    pub chunk_size: usize,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom distance pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_distance_pass: Option<DistancePassFn<T>>,

    /// Whether to use parallel execution.
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T: Float> Default for DistanceConfig<T> {
    fn default() -> Self {
        Self {
            kernel: DistanceKernel::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            custom_distance_pass: None,
            parallel: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Dispatches a distance pass according to its configuration.
pub struct DistanceExecutor;

impl DistanceExecutor {
    /// Run the configured pass, writing one distance per pair into `out`.
    ///
    /// Falls back to the sequential pass when no custom pass is installed or
    /// parallel execution is disabled.
    pub fn run_with_config<T: Float>(
        a: &Points<'_, T>,
        b: &Points<'_, T>,
        out: &mut [T],
        config: &DistanceConfig<T>,
    ) {
        match config.custom_distance_pass {
            Some(pass) if config.parallel => pass(a, b, out, config.kernel, config.chunk_size),
            _ => distance_pass_sequential(a, b, out, config.kernel),
        }
    }
}

/// Sequential distance pass.
///
/// `out[i] = kernel(b.x[i] - a.x[i], b.y[i] - a.y[i])` for every `i`.
/// With zero pairs the loop body never runs and `out` is untouched.
pub fn distance_pass_sequential<T: Float>(
    a: &Points<'_, T>,
    b: &Points<'_, T>,
    out: &mut [T],
    kernel: DistanceKernel,
) {
    let pairs = a.iter().zip(b.iter());
    for (slot, (p, q)) in out.iter_mut().zip(pairs) {
        *slot = kernel.between(p, q);
    }
}

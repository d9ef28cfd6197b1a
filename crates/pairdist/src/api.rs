//! High-level API for pairwise distance computation.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: two free functions for
//! the common case and a fluent builder for configured use.
//!
//! ## Design notes
//!
//! * **Ergonomic**: `euclidean` / `euclidean_into` need no configuration.
//! * **Validated**: Builder parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DistanceBuilder`] via `Distance::new()`.
//! 2. Chain configuration methods (`.kernel()`, `.require_finite()`).
//! 3. Call `.build()` to get a [`PairwiseDistance`] processor.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{
    DEFAULT_CHUNK_SIZE, DistanceConfig, DistanceExecutor, DistancePassFn,
};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::DistanceResult;
pub use crate::math::kernel::DistanceKernel;
pub use crate::primitives::errors::DistanceError;

// ============================================================================
// Free Functions
// ============================================================================

/// Write the Euclidean distance between corresponding points into `dist`.
///
/// `dist[i] = sqrt((x2[i] - x1[i])^2 + (y2[i] - y1[i])^2)`. All five slices
/// must have the same length; with zero points nothing is written.
///
/// ```rust
/// use pairdist::prelude::*;
///
/// let mut dist = [0.0; 2];
/// euclidean_into(&[0.0, 0.0], &[0.0, 0.0], &[3.0, 1.0], &[4.0, 0.0], &mut dist)?;
/// assert_eq!(dist, [5.0, 1.0]);
/// # Result::<(), DistanceError>::Ok(())
/// ```
pub fn euclidean_into<T: Float>(
    x1: &[T],
    y1: &[T],
    x2: &[T],
    y2: &[T],
    dist: &mut [T],
) -> Result<(), DistanceError> {
    let (a, b) = Validator::validate_inputs(x1, y1, x2, y2)?;
    Validator::validate_output(a.len(), dist.len())?;
    DistanceExecutor::run_with_config(&a, &b, dist, &DistanceConfig::default());
    Ok(())
}

/// Allocating form of [`euclidean_into`].
pub fn euclidean<T: Float>(
    x1: &[T],
    y1: &[T],
    x2: &[T],
    y2: &[T],
) -> Result<Vec<T>, DistanceError> {
    let mut dist = vec![T::zero(); x1.len()];
    euclidean_into(x1, y1, x2, y2, &mut dist)?;
    Ok(dist)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a pairwise distance processor.
#[derive(Debug, Clone)]
pub struct DistanceBuilder<T> {
    /// Kernel applied to each coordinate difference.
    pub kernel: Option<DistanceKernel>,

    /// Reject NaN and infinite coordinates instead of propagating them.
    pub require_finite: Option<bool>,

    /// Pairs per parallel work item.
    pub chunk_size: Option<usize>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom distance pass function.
    #[doc(hidden)]
    pub custom_distance_pass: Option<DistancePassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for DistanceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DistanceBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            kernel: None,
            require_finite: None,
            chunk_size: None,
            custom_distance_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the distance kernel (default: `Direct`).
    pub fn kernel(mut self, kernel: DistanceKernel) -> Self {
        if self.kernel.is_some() {
            self.duplicate_param = Some("kernel");
        }
        self.kernel = Some(kernel);
        self
    }

    /// Reject non-finite coordinates with `InvalidNumericValue` (default: off).
    pub fn require_finite(mut self, require: bool) -> Self {
        if self.require_finite.is_some() {
            self.duplicate_param = Some("require_finite");
        }
        self.require_finite = Some(require);
        self
    }

    /// Set the number of pairs per parallel work item.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        if self.chunk_size.is_some() {
            self.duplicate_param = Some("chunk_size");
        }
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Set a custom distance pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_distance_pass(mut self, pass: DistancePassFn<T>) -> Self {
        self.custom_distance_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Build the processor.
    pub fn build(self) -> Result<PairwiseDistance<T>, DistanceError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let chunk_size = self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE);
        Validator::validate_chunk_size(chunk_size, 1)?;

        Ok(PairwiseDistance {
            config: DistanceConfig {
                kernel: self.kernel.unwrap_or_default(),
                chunk_size,
                custom_distance_pass: self.custom_distance_pass,
                parallel: self.parallel.unwrap_or(false),
            },
            require_finite: self.require_finite.unwrap_or(false),
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Configured pairwise distance processor.
#[derive(Debug, Clone, Copy)]
pub struct PairwiseDistance<T: Float> {
    config: DistanceConfig<T>,
    require_finite: bool,
}

impl<T: Float> PairwiseDistance<T> {
    /// Kernel this processor applies.
    pub fn kernel(&self) -> DistanceKernel {
        self.config.kernel
    }

    /// Whether the parallel pass will be used.
    pub fn is_parallel(&self) -> bool {
        self.config.parallel && self.config.custom_distance_pass.is_some()
    }

    /// Compute distances into a caller-allocated buffer.
    ///
    /// Every check runs before the first write, so `dist` is left untouched
    /// on error.
    pub fn compute_into(
        &self,
        x1: &[T],
        y1: &[T],
        x2: &[T],
        y2: &[T],
        dist: &mut [T],
    ) -> Result<(), DistanceError> {
        let (a, b) = Validator::validate_inputs(x1, y1, x2, y2)?;
        Validator::validate_output(a.len(), dist.len())?;

        if self.require_finite {
            Validator::validate_finite(&a, "x1", "y1")?;
            Validator::validate_finite(&b, "x2", "y2")?;
        }

        DistanceExecutor::run_with_config(&a, &b, dist, &self.config);
        Ok(())
    }

    /// Compute distances into a freshly allocated result.
    pub fn compute(
        &self,
        x1: &[T],
        y1: &[T],
        x2: &[T],
        y2: &[T],
    ) -> Result<DistanceResult<T>, DistanceError> {
        let mut distances = vec![T::zero(); x1.len()];
        self.compute_into(x1, y1, x2, y2, &mut distances)?;

        Ok(DistanceResult {
            distances,
            kernel: self.config.kernel,
            parallel: self.is_parallel(),
        })
    }
}

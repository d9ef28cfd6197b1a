//! High-level API for pairwise distance with parallel execution support.
//!
//! ## Purpose
//!
//! This module extends the `pairdist` API with a builder that installs the
//! rayon pass, and with entry points that accept any [`DistanceInput`].
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Wraps the base `pairdist` builder.
//! * **Parallel-First**: Parallel execution is on unless disabled.
//! * **Feature-Gated**: Without the `cpu` feature everything runs sequentially.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelDistanceBuilder`] via `Distance::new()`.
//! 2. Chain configuration methods (`.kernel()`, `.chunk_size()`, ...).
//! 3. Call `.build()` to get a [`ParallelPairwiseDistance`] processor.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::distance_pass_parallel;

// External dependencies
use num_traits::Float;

// Export dependencies from pairdist crate
use pairdist::internals::api::{DistanceBuilder, PairwiseDistance};

// Internal dependencies
use crate::input::DistanceInput;

// Publicly re-exported types
pub use pairdist::internals::engine::output::DistanceResult;
pub use pairdist::internals::math::kernel::DistanceKernel;
pub use pairdist::internals::primitives::errors::DistanceError;

// ============================================================================
// Free Functions
// ============================================================================

/// Parallel form of `pairdist::prelude::euclidean_into`.
pub fn par_euclidean_into<T, I>(
    x1: &I,
    y1: &I,
    x2: &I,
    y2: &I,
    dist: &mut [T],
) -> Result<(), DistanceError>
where
    T: Float + Send + Sync,
    I: DistanceInput<T> + ?Sized,
{
    ParallelDistanceBuilder::new()
        .build()?
        .compute_into(x1, y1, x2, y2, dist)
}

/// Parallel form of `pairdist::prelude::euclidean`.
pub fn par_euclidean<T, I>(x1: &I, y1: &I, x2: &I, y2: &I) -> Result<Vec<T>, DistanceError>
where
    T: Float + Send + Sync,
    I: DistanceInput<T> + ?Sized,
{
    Ok(ParallelDistanceBuilder::new()
        .build()?
        .compute(x1, y1, x2, y2)?
        .into_vec())
}

// ============================================================================
// Extended Builder
// ============================================================================

/// Builder for a pairwise distance processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelDistanceBuilder<T: Float> {
    /// Base builder from the pairdist crate
    pub base: DistanceBuilder<T>,
}

impl<T: Float + Send + Sync> Default for ParallelDistanceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Send + Sync> ParallelDistanceBuilder<T> {
    /// Create a new builder.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the pairdist `DistanceBuilder`
    /// * parallel: true (fastPairdist extension)
    pub fn new() -> Self {
        Self {
            base: DistanceBuilder::new(),
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.base.parallel.is_some() {
            self.base.duplicate_param = Some("parallel");
        }
        self.base = self.base.parallel(parallel);
        self
    }

    /// Set the distance kernel.
    pub fn kernel(mut self, kernel: DistanceKernel) -> Self {
        self.base = self.base.kernel(kernel);
        self
    }

    /// Reject non-finite coordinates.
    pub fn require_finite(mut self, require: bool) -> Self {
        self.base = self.base.require_finite(require);
        self
    }

    /// Set the number of pairs per parallel work item.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.base = self.base.chunk_size(chunk_size);
        self
    }

    /// Build the processor.
    pub fn build(self) -> Result<ParallelPairwiseDistance<T>, DistanceError> {
        let parallel = self.base.parallel.unwrap_or(true);

        // Base default is sequential
        let mut base = self.base;
        base.parallel = Some(parallel);

        // Install the rayon pass when parallel execution was not turned off
        #[cfg(feature = "cpu")]
        let base = if parallel {
            base.custom_distance_pass(distance_pass_parallel::<T>)
        } else {
            base
        };

        Ok(ParallelPairwiseDistance {
            inner: base.build()?,
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Configured pairwise distance processor with parallel support.
#[derive(Debug, Clone, Copy)]
pub struct ParallelPairwiseDistance<T: Float> {
    inner: PairwiseDistance<T>,
}

impl<T: Float + Send + Sync> ParallelPairwiseDistance<T> {
    /// Kernel this processor applies.
    pub fn kernel(&self) -> DistanceKernel {
        self.inner.kernel()
    }

    /// Whether the rayon pass is installed and enabled.
    pub fn is_parallel(&self) -> bool {
        self.inner.is_parallel()
    }

    /// Compute distances into a caller-allocated buffer.
    pub fn compute_into<I>(
        &self,
        x1: &I,
        y1: &I,
        x2: &I,
        y2: &I,
        dist: &mut [T],
    ) -> Result<(), DistanceError>
    where
        I: DistanceInput<T> + ?Sized,
    {
        self.inner.compute_into(
            x1.as_coord_slice()?,
            y1.as_coord_slice()?,
            x2.as_coord_slice()?,
            y2.as_coord_slice()?,
            dist,
        )
    }

    /// Compute distances into a freshly allocated result.
    pub fn compute<I>(
        &self,
        x1: &I,
        y1: &I,
        x2: &I,
        y2: &I,
    ) -> Result<DistanceResult<T>, DistanceError>
    where
        I: DistanceInput<T> + ?Sized,
    {
        self.inner.compute(
            x1.as_coord_slice()?,
            y1.as_coord_slice()?,
            x2.as_coord_slice()?,
            y2.as_coord_slice()?,
        )
    }
}

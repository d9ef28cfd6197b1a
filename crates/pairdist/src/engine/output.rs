//! Output type for the allocating distance entry points.
//!
//! ## Purpose
//!
//! This module defines `DistanceResult`, the owned result returned when the
//! crate allocates the output buffer on the caller's behalf.
//!
//! ## Invariants
//!
//! * `distances.len()` equals the number of input point pairs.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::DistanceKernel;

/// Number of rows printed by `Display` before the table is elided.
const DISPLAY_ROWS: usize = 10;

// ============================================================================
// Result Structure
// ============================================================================

/// Distances between corresponding points, with the settings that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceResult<T> {
    /// One distance per point pair, in input order.
    pub distances: Vec<T>,

    /// Kernel used for the pass.
    pub kernel: DistanceKernel,

    /// Whether the pass ran on the parallel path.
    pub parallel: bool,
}

impl<T: Float> DistanceResult<T> {
    /// Number of distances.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// True when no pairs were processed.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Largest distance, ignoring NaN. `None` when empty or all NaN.
    pub fn max(&self) -> Option<T> {
        self.distances
            .iter()
            .copied()
            .filter(|d| !d.is_nan())
            .fold(None, |acc, d| Some(acc.map_or(d, |m: T| m.max(d))))
    }

    /// Consume the result, keeping only the distances.
    pub fn into_vec(self) -> Vec<T> {
        self.distances
    }
}

impl<T> AsRef<[T]> for DistanceResult<T> {
    fn as_ref(&self) -> &[T] {
        &self.distances
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for DistanceResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Point pairs: {}", self.distances.len())?;
        writeln!(f, "  Kernel:      {}", self.kernel.name())?;
        if self.parallel {
            writeln!(f, "  Execution:   Parallel")?;
        }
        writeln!(f)?;

        writeln!(f, "Distances:")?;
        writeln!(f, "{:>8} {:>14}", "Index", "Distance")?;
        writeln!(f, "  {:-<21}", "")?;
        for (i, d) in self.distances.iter().take(DISPLAY_ROWS).enumerate() {
            writeln!(f, "{:>8} {:>14.6}", i, d)?;
        }
        if self.distances.len() > DISPLAY_ROWS {
            writeln!(f, "{:>8}", "...")?;
        }
        Ok(())
    }
}

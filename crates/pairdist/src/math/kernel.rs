//! Distance kernels for planar point pairs.
//!
//! ## Purpose
//!
//! This module maps a coordinate difference `(dx, dy)` to a Euclidean
//! distance. It is the only place in the crate that does arithmetic on
//! coordinates.
//!
//! ## Design notes
//!
//! * **Direct**: `sqrt(dx*dx + dy*dy)`, the plain formula. Fastest, and the
//!   default.
//! * **Hypot**: `dx.hypot(dy)`, scales internally so the squared terms never
//!   overflow or underflow.
//!
//! ## Invariants
//!
//! * Both kernels are non-negative and symmetric in the sign of `dx` and `dy`.
//! * NaN in either component yields NaN (IEEE-754 propagation), except that
//!   `Hypot` returns infinity when the other component is infinite.
//!
//! ## Non-goals
//!
//! * This module does not handle distances in more than two dimensions.

// External dependencies
use num_traits::Float;

// ============================================================================
// Distance Kernel Enum
// ============================================================================

/// Scalar function turning a coordinate difference into a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceKernel {
    /// K(dx, dy) = sqrt(dx^2 + dy^2).
    ///
    /// This is the default kernel choice.
    #[default]
    Direct,

    /// K(dx, dy) = hypot(dx, dy), overflow-safe.
    Hypot,
}

impl DistanceKernel {
    /// Get the name of the kernel.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            DistanceKernel::Direct => "Direct",
            DistanceKernel::Hypot => "Hypot",
        }
    }

    /// Compute the distance for one coordinate difference.
    #[inline(always)]
    pub fn compute<T: Float>(&self, dx: T, dy: T) -> T {
        match self {
            DistanceKernel::Direct => (dx * dx + dy * dy).sqrt(),
            DistanceKernel::Hypot => dx.hypot(dy),
        }
    }

    /// Distance between two points.
    #[inline]
    pub fn between<T: Float>(&self, (x1, y1): (T, T), (x2, y2): (T, T)) -> T {
        self.compute(x2 - x1, y2 - y1)
    }
}

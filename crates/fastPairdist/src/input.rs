//! Input abstractions for pairwise distance computation.
//!
//! ## Purpose
//!
//! This module lets `compute` accept slices, vectors and `ndarray` arrays
//! through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct slice access to the underlying buffer.
//! * **Fail-fast validation**: Non-contiguous arrays are rejected before
//!   processing.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the input container.
//!
//! ## Non-goals
//!
//! * This module does not copy or reorder strided data.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from pairdist crate
use pairdist::internals::primitives::errors::DistanceError;

/// Trait for types that can be used as a coordinate array.
pub trait DistanceInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_coord_slice(&self) -> Result<&[T], DistanceError>;
}

impl<T: Float> DistanceInput<T> for [T] {
    fn as_coord_slice(&self) -> Result<&[T], DistanceError> {
        Ok(self)
    }
}

impl<T: Float, const N: usize> DistanceInput<T> for [T; N] {
    fn as_coord_slice(&self) -> Result<&[T], DistanceError> {
        Ok(self.as_slice())
    }
}

impl<T: Float> DistanceInput<T> for Vec<T> {
    fn as_coord_slice(&self) -> Result<&[T], DistanceError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> DistanceInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_coord_slice(&self) -> Result<&[T], DistanceError> {
        self.as_slice().ok_or_else(|| {
            DistanceError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

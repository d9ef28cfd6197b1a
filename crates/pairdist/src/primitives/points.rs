//! Borrowed view over a planar point sequence.
//!
//! Points are stored the way host applications hand them over: two parallel
//! coordinate arrays, one for `x` and one for `y`. `Points` ties the pair
//! together and guarantees both arrays have the same length.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DistanceError;

/// A sequence of 2-D points stored as parallel `x` and `y` slices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Points<'a, T> {
    /// X coordinates.
    pub x: &'a [T],
    /// Y coordinates.
    pub y: &'a [T],
}

impl<'a, T: Float> Points<'a, T> {
    /// Pair up two coordinate slices.
    ///
    /// `y_name` is only used in the error when the lengths differ.
    pub fn new(x: &'a [T], y: &'a [T], y_name: &'static str) -> Result<Self, DistanceError> {
        if x.len() != y.len() {
            return Err(DistanceError::MismatchedInputs {
                name: y_name,
                expected: x.len(),
                got: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when the sequence holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Point at index `i`, if in range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<(T, T)> {
        Some((*self.x.get(i)?, *self.y.get(i)?))
    }

    /// Sub-range of the sequence, used to hand chunks to parallel workers.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> Points<'a, T> {
        Points {
            x: &self.x[start..end],
            y: &self.y[start..end],
        }
    }

    /// Iterate over `(x, y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + 'a {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

//! Input validation for pairwise distance configuration and data.
//!
//! ## Purpose
//!
//! This module checks the shape of the four coordinate arrays and the output
//! buffer before the kernel runs, plus the few builder parameters that have
//! bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Length checks run first; the finiteness scan is opt-in.
//!
//! ## Invariants
//!
//! * Validation never writes to the output buffer.
//! * Empty inputs are valid; they simply produce no distances.
//!
//! ## Non-goals
//!
//! * This module does not repair or filter invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DistanceError;
use crate::primitives::points::Points;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for distance configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the four coordinate arrays and pair them into point views.
    ///
    /// Every array is compared against `x1`, so the first reported mismatch
    /// names the array that disagrees with it.
    pub fn validate_inputs<'a, T: Float>(
        x1: &'a [T],
        y1: &'a [T],
        x2: &'a [T],
        y2: &'a [T],
    ) -> Result<(Points<'a, T>, Points<'a, T>), DistanceError> {
        let first = Points::new(x1, y1, "y1")?;

        if x2.len() != x1.len() {
            return Err(DistanceError::MismatchedInputs {
                name: "x2",
                expected: x1.len(),
                got: x2.len(),
            });
        }
        let second = Points::new(x2, y2, "y2")?;

        Ok((first, second))
    }

    /// Validate that the output buffer holds exactly one slot per pair.
    pub fn validate_output(pairs: usize, output_len: usize) -> Result<(), DistanceError> {
        if pairs != output_len {
            return Err(DistanceError::MismatchedOutput {
                expected: pairs,
                got: output_len,
            });
        }
        Ok(())
    }

    /// Validate that every coordinate of a point sequence is finite.
    ///
    /// `x_name` and `y_name` label the arrays in the error message.
    pub fn validate_finite<T: Float>(
        points: &Points<'_, T>,
        x_name: &str,
        y_name: &str,
    ) -> Result<(), DistanceError> {
        for (i, (x, y)) in points.iter().enumerate() {
            if !x.is_finite() {
                return Err(DistanceError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    x_name,
                    i,
                    x.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y.is_finite() {
                return Err(DistanceError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    y_name,
                    i,
                    y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the minimum chunk size used to split a parallel pass.
    pub fn validate_chunk_size(chunk_size: usize, min: usize) -> Result<(), DistanceError> {
        if chunk_size < min {
            return Err(DistanceError::InvalidChunkSize {
                got: chunk_size,
                min,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), DistanceError> {
        if let Some(param) = duplicate_param {
            return Err(DistanceError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

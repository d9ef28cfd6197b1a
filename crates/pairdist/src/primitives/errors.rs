//! Error types for pairwise distance operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while computing
//! pairwise distances: coordinate arrays of unequal length, an output buffer
//! of the wrong size, rejected non-finite values, and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending lengths or values.
//! * **Deferred**: Builder misuse is recorded and surfaced by `build()`.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//!
//! ## Invariants
//!
//! * Every variant is raised before any element of the output is written.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for pairwise distance operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DistanceError {
    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// A coordinate array does not have the same length as `x1`.
    MismatchedInputs {
        /// Name of the offending array (`y1`, `x2` or `y2`).
        name: &'static str,
        /// Length of `x1`.
        expected: usize,
        /// Length of the offending array.
        got: usize,
    },

    /// The output buffer must hold exactly one distance per point pair.
    MismatchedOutput {
        /// Number of point pairs.
        expected: usize,
        /// Length of the output buffer.
        got: usize,
    },

    /// Input contains NaN or infinite values and finiteness was required.
    InvalidNumericValue(String),

    /// Parallel chunk size is too small to make progress.
    InvalidChunkSize {
        /// The chunk size provided.
        got: usize,
        /// Minimum accepted chunk size.
        min: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DistanceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::MismatchedInputs {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Length mismatch: x1 has {expected} points, {name} has {got}"
                )
            }
            Self::MismatchedOutput { expected, got } => {
                write!(
                    f,
                    "Output length mismatch: {expected} point pairs, output holds {got}"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidChunkSize { got, min } => {
                write!(f, "Invalid chunk_size: {got} (must be at least {min})")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for DistanceError {}

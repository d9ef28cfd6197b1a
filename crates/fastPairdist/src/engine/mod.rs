//! Layer 3: Engine
//!
//! Parallel passes plugged into the `pairdist` executor.

/// Rayon distance pass.
#[cfg(feature = "cpu")]
pub mod executor;

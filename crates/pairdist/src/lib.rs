//! # pairdist (Pairwise Euclidean Distance)
//!
//! Given two sequences of 2-D points of equal length, stored as parallel
//! coordinate arrays, `pairdist` computes the straight-line distance between
//! each pair of corresponding points:
//!
//! ```text
//! dist[i] = sqrt((x2[i] - x1[i])^2 + (y2[i] - y1[i])^2)
//! ```
//!
//! The crate is the kernel behind the `get_distance` C shared library and
//! the parallel `fastPairdist` extension.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use pairdist::prelude::*;
//!
//! let x1 = [0.0, 0.0];
//! let y1 = [0.0, 0.0];
//! let x2 = [3.0, 1.0];
//! let y2 = [4.0, 0.0];
//!
//! let dist = euclidean(&x1, &y1, &x2, &y2)?;
//! assert_eq!(dist, vec![5.0, 1.0]);
//! # Result::<(), DistanceError>::Ok(())
//! ```
//!
//! ### Caller-Allocated Output
//!
//! ```rust
//! use pairdist::prelude::*;
//!
//! let mut dist = vec![0.0_f32; 3];
//! euclidean_into(
//!     &[1.0, 2.0, 3.0],
//!     &[1.0, 2.0, 3.0],
//!     &[1.0, 2.0, 3.0],
//!     &[1.0, 2.0, 3.0],
//!     &mut dist,
//! )?;
//! assert_eq!(dist, vec![0.0, 0.0, 0.0]);
//! # Result::<(), DistanceError>::Ok(())
//! ```
//!
//! ### Configured Use
//!
//! ```rust
//! use pairdist::prelude::*;
//!
//! let model = Distance::new()
//!     .kernel(Hypot)          // Overflow-safe kernel
//!     .require_finite(true)   // Reject NaN / infinite coordinates
//!     .build()?;
//!
//! let result = model.compute(&[0.0, 0.0], &[0.0, 0.0], &[3.0, 1.0], &[4.0, 0.0])?;
//! println!("{}", result);
//! # Result::<(), DistanceError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Point pairs: 2
//!   Kernel:      Hypot
//!
//! Distances:
//!    Index       Distance
//!   ---------------------
//!        0       5.000000
//!        1       1.000000
//! ```
//!
//! ### Result and Error Handling
//!
//! Every entry point returns `Result<_, DistanceError>`. Arrays of unequal
//! length and an output buffer of the wrong size are reported before any
//! element is written. NaN and infinities follow IEEE-754 unless
//! `require_finite(true)` is set.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! pairdist = { version = "0.3", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Engine - validation, execution and output.
mod engine;

// High-level fluent API.
mod api;

// Standard pairdist prelude.
pub mod prelude {
    pub use crate::api::{
        DistanceBuilder as Distance, DistanceError, DistanceKernel, DistanceKernel::Direct,
        DistanceKernel::Hypot, DistanceResult, PairwiseDistance, euclidean, euclidean_into,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

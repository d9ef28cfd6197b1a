//! # fastPairdist (Parallel Pairwise Euclidean Distance)
//!
//! `fastPairdist` extends [`pairdist`](https://docs.rs/pairdist) with
//! multi-core execution via `rayon` and native `ndarray` inputs. Results are
//! bitwise identical to the sequential `pairdist` kernel.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastPairdist::prelude::*;
//!
//! let x1 = vec![0.0, 0.0];
//! let y1 = vec![0.0, 0.0];
//! let x2 = vec![3.0, 1.0];
//! let y2 = vec![4.0, 0.0];
//!
//! // Build the processor with parallel execution (default)
//! let model = Distance::new()
//!     .kernel(Direct)       // sqrt(dx^2 + dy^2)
//!     .chunk_size(8192)     // Pairs per rayon work item
//!     .build()?;
//!
//! let result = model.compute(&x1, &y1, &x2, &y2)?;
//! assert_eq!(result.distances, vec![5.0, 1.0]);
//! # Result::<(), DistanceError>::Ok(())
//! ```
//!
//! ### One-Shot Helpers
//!
//! ```rust
//! use fastPairdist::prelude::*;
//!
//! let x1 = vec![1.0; 10_000];
//! let y1 = vec![1.0; 10_000];
//! let x2 = vec![4.0; 10_000];
//! let y2 = vec![5.0; 10_000];
//!
//! let dist: Vec<f64> = par_euclidean(&x1, &y1, &x2, &y2)?;
//! assert!(dist.iter().all(|&d| d == 5.0));
//! # Result::<(), DistanceError>::Ok(())
//! ```
//!
//! ### ndarray Integration
//!
//! ```rust
//! use fastPairdist::prelude::*;
//! use ndarray::Array1;
//!
//! let x1 = Array1::from_vec((0..100).map(|i| i as f64).collect());
//! let y1 = Array1::zeros(100);
//! let x2 = x1.clone();
//! let y2 = Array1::from_elem(100, 2.0);
//!
//! let model = Distance::new().build()?;
//!
//! // compute() accepts &Array1<f64>, &[f64], or &Vec<f64>
//! let result = model.compute(&x1, &y1, &x2, &y2)?;
//! assert!(result.distances.iter().all(|&d| d == 2.0));
//! # Result::<(), DistanceError>::Ok(())
//! ```
//!
//! Non-contiguous views (e.g. `array.slice(s![..;2])`) are rejected with
//! `DistanceError::InvalidInput`.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![allow(non_snake_case)]

// Layer 3: Engine - parallel passes.
mod engine;

// High-level fluent API.
mod api;

// Input data handling.
mod input;

// Standard fastPairdist prelude.
pub mod prelude {
    pub use crate::api::{
        DistanceError, DistanceKernel,
        DistanceKernel::{Direct, Hypot},
        DistanceResult, ParallelDistanceBuilder as Distance, ParallelPairwiseDistance,
        par_euclidean, par_euclidean_into,
    };
    pub use crate::input::DistanceInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}

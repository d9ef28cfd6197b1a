//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical functions used by the engine.
//! It has no knowledge of buffers, validation or execution strategy.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Distance kernels.
pub mod kernel;

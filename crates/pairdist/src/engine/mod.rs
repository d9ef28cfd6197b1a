//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer validates inputs, runs the distance pass and packages the
//! output.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pass dispatch and the sequential pass.
pub mod executor;

/// Result type.
pub mod output;

/// Input and parameter validation.
pub mod validator;

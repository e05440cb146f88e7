//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions, data structures, and
//! utility functions used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: Census
//!   ↓
//! Layer 6: API
//!   ↓
//! Layer 5: Detector
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math / Geometry
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Nearest-neighbour windowing.
pub mod window;

/// Working memory for smoothing.
pub mod buffer;

/// Sampled and smoothed signal containers.
pub mod series;

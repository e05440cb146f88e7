//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the smoother:
//! - Kernel functions for distance-based weighting
//! - Robust scale (median absolute residual)
//!
//! These are reusable building blocks with no algorithm-specific logic.

/// Tricube kernel weighting.
pub mod kernel;

/// Robust scale estimation.
pub mod scaling;

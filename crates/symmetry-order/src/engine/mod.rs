//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer turns geometry into a signal and a signal into a smooth curve.
//! It coordinates the algorithms (kernels, regression, robustness) into the
//! rotation sampler and the LOESS smoothing loop, and validates their inputs.

/// Rotation sampling of the deviation signal.
pub mod sampler;

/// Robust LOESS smoothing loop.
pub mod smoother;

/// Validation utilities.
pub mod validator;

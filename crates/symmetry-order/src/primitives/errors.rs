//! Error types for symmetry order detection.
//!
//! ## Purpose
//!
//! This module defines the error conditions raised by each stage of the
//! detection pipeline: geometric input checks, LOESS smoothing, detector
//! configuration, and the facade error that wraps stage failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., both set lengths).
//! * **Layered**: Each stage has its own error type; the facade converts them
//!   into [`OrderDetectionFailedError`] and keeps the original as `source()`.
//! * **Eager**: [`ConfigurationError`] is raised when a configuration is built,
//!   never on first use.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retry strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use std::error::Error as StdError;
use thiserror::Error;

// ============================================================================
// Geometry Errors
// ============================================================================

/// Malformed or degenerate geometric input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A coordinate set contains no points.
    #[error("coordinate set is empty")]
    EmptyCoordinates,

    /// Compared coordinate sets must have index-wise correspondence.
    #[error("coordinate set sizes differ: {a_len} vs {b_len}")]
    MismatchedLengths {
        /// Number of points in the reference set.
        a_len: usize,
        /// Number of points in the compared set.
        b_len: usize,
    },

    /// The rotation axis direction has zero length.
    #[error("rotation axis direction is degenerate (zero length)")]
    DegenerateAxis,

    /// Angular sampling step must be in (0, 360] degrees and bound the
    /// number of samples.
    #[error("invalid angular step: {0} degrees (must be > 0 and <= 360, at most 3600001 samples)")]
    InvalidStep(f64),

    /// Geometric input contains NaN or infinite values.
    #[error("non-finite coordinate: {0}")]
    NonFinite(String),
}

// ============================================================================
// Smoothing Errors
// ============================================================================

/// Invalid smoothing parameters or an unsolvable local fit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SmoothingError {
    /// Input arrays are empty.
    #[error("input arrays are empty")]
    EmptyInput,

    /// Angle and metric arrays must have the same number of elements.
    #[error("length mismatch: angles has {x_len} points, metrics has {y_len}")]
    MismatchedInputs {
        /// Number of angles.
        x_len: usize,
        /// Number of metric values.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    #[error("invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Angles must be strictly increasing.
    #[error("angles are not strictly increasing at index {index}")]
    NotStrictlyIncreasing {
        /// First index whose angle does not exceed its predecessor.
        index: usize,
    },

    /// Bandwidth must be in the range (0, 1].
    #[error("invalid bandwidth: {0} (must be > 0 and <= 1)")]
    InvalidBandwidth(f64),

    /// Convergence accuracy must be positive and finite.
    #[error("invalid accuracy: {0} (must be > 0 and finite)")]
    InvalidAccuracy(f64),

    /// The local window is too small to fit a line.
    #[error("too few points in local window: got {got}, need at least {min}")]
    TooFewPoints {
        /// Points per local window implied by the bandwidth.
        got: usize,
        /// Minimum points required.
        min: usize,
    },

    /// No point of the local window carries any weight.
    #[error("singular local fit at index {index}: all weights are zero")]
    SingularFit {
        /// Index of the point being fitted.
        index: usize,
    },
}

// ============================================================================
// Facade Error
// ============================================================================

/// Stage failure wrapped by [`OrderDetectionFailedError`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectionFailure {
    /// Sampling failed on the geometric input.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Smoothing failed on the sampled signal.
    #[error(transparent)]
    Smoothing(#[from] SmoothingError),
}

/// The single error kind raised by an order detector.
///
/// `source()` yields the stage error itself ([`GeometryError`] or
/// [`SmoothingError`]), so callers can downcast it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetectionFailedError {
    cause: DetectionFailure,
}

impl OrderDetectionFailedError {
    /// Wrap a stage failure.
    pub fn new(cause: impl Into<DetectionFailure>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    /// The stage failure that caused detection to fail.
    pub fn failure(&self) -> &DetectionFailure {
        &self.cause
    }
}

impl Display for OrderDetectionFailedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "order detection failed: {}", self.cause)
    }
}

impl StdError for OrderDetectionFailedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.cause {
            DetectionFailure::Geometry(err) => Some(err),
            DetectionFailure::Smoothing(err) => Some(err),
        }
    }
}

impl From<GeometryError> for OrderDetectionFailedError {
    fn from(err: GeometryError) -> Self {
        Self::new(err)
    }
}

impl From<SmoothingError> for OrderDetectionFailedError {
    fn from(err: SmoothingError) -> Self {
        Self::new(err)
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Out-of-range parameter supplied while building a detector configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// Maximum order must be at least 1.
    #[error("invalid max_order: {0} (must be >= 1)")]
    InvalidMaxOrder(usize),

    /// Angular sampling step must be in (0, 360] degrees and bound the
    /// number of samples.
    #[error("invalid degree_sampling: {0} (must be > 0 and <= 360, at most 3600001 samples)")]
    InvalidDegreeSampling(f64),

    /// Peak threshold must be finite and non-negative.
    #[error("invalid epsilon: {0} (must be >= 0 and finite)")]
    InvalidEpsilon(f64),

    /// Bandwidth must be in the range (0, 1].
    #[error("invalid bandwidth: {0} (must be > 0 and <= 1)")]
    InvalidBandwidth(f64),

    /// Robustness iterations are capped to bound computation.
    #[error("invalid robustness_iterations: {0} (must be in [0, 1000])")]
    InvalidRobustnessIterations(usize),

    /// LOESS convergence accuracy must be positive and finite.
    #[error("invalid loess_accuracy: {0} (must be > 0 and finite)")]
    InvalidAccuracy(f64),

    /// Parameter was set multiple times in the builder.
    #[error(
        "parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
    )]
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

//! High-level configuration API for order detection.
//!
//! ## Purpose
//!
//! This module provides the user-facing configuration for the peak-counting
//! detector. It implements a fluent builder with defaults for every
//! parameter and validates the whole configuration once, when it is built.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Every parameter is checked in `build()`; a configuration
//!   that exists is always valid.
//! * **Immutable**: [`DetectorConfig`] exposes getters only and is `Copy`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DetectorConfigBuilder`] via `DetectorConfig::builder()`.
//! 2. Chain configuration methods (`.bandwidth()`, `.degree_sampling()`, etc.).
//! 3. Call `.build()` to obtain a [`DetectorConfig`].
//!
//! ## Parameters
//!
//! | Parameter               | Default | Range        | Role                                 |
//! |-------------------------|---------|--------------|--------------------------------------|
//! | `max_order`             | 9       | >= 1         | Advisory; not applied to the result  |
//! | `degree_sampling`       | 1.0     | (0, 360]     | Angular step in degrees              |
//! | `epsilon`               | 1e-6    | >= 0, finite | Peak threshold in degrees (advisory) |
//! | `bandwidth`             | 0.1     | (0, 1]       | Fraction of points per local fit     |
//! | `robustness_iterations` | 2       | [0, 1000]    | Bisquare reweighting passes          |
//! | `loess_accuracy`        | 1e-12   | > 0, finite  | Smoother convergence tolerance       |
//!
//! `degree_sampling` must also yield at most
//! [`MAX_SAMPLES`](crate::engine::validator::MAX_SAMPLES) samples per
//! revolution, which puts the finest step at 0.0001°.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::ConfigurationError;

const DEFAULT_MAX_ORDER: usize = 9;
const DEFAULT_DEGREE_SAMPLING: f64 = 1.0;
const DEFAULT_EPSILON: f64 = 1e-6;
const DEFAULT_BANDWIDTH: f64 = 0.1;
const DEFAULT_ROBUSTNESS_ITERATIONS: usize = 2;
const DEFAULT_LOESS_ACCURACY: f64 = 1e-12;

// ============================================================================
// Detector Configuration
// ============================================================================

/// Validated, immutable parameters of the peak-counting detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    max_order: usize,
    degree_sampling: f64,
    epsilon: f64,
    bandwidth: f64,
    robustness_iterations: usize,
    loess_accuracy: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_order: DEFAULT_MAX_ORDER,
            degree_sampling: DEFAULT_DEGREE_SAMPLING,
            epsilon: DEFAULT_EPSILON,
            bandwidth: DEFAULT_BANDWIDTH,
            robustness_iterations: DEFAULT_ROBUSTNESS_ITERATIONS,
            loess_accuracy: DEFAULT_LOESS_ACCURACY,
        }
    }
}

impl DetectorConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> DetectorConfigBuilder {
        DetectorConfigBuilder::new()
    }

    /// Largest order the caller expects. Not applied to the detected order.
    pub fn max_order(&self) -> usize {
        self.max_order
    }

    /// Angular step between samples, in degrees.
    pub fn degree_sampling(&self) -> f64 {
        self.degree_sampling
    }

    /// Peak threshold in degrees.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Fraction of samples in each local fit.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Robustness iterations after the initial fit.
    pub fn robustness_iterations(&self) -> usize {
        self.robustness_iterations
    }

    /// Smoother convergence tolerance.
    pub fn loess_accuracy(&self) -> f64 {
        self.loess_accuracy
    }
}

impl Display for DetectorConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Detector configuration:")?;
        writeln!(f, "  max_order:             {}", self.max_order)?;
        writeln!(f, "  degree_sampling:       {}", self.degree_sampling)?;
        writeln!(f, "  epsilon:               {:e}", self.epsilon)?;
        writeln!(f, "  bandwidth:             {}", self.bandwidth)?;
        writeln!(f, "  robustness_iterations: {}", self.robustness_iterations)?;
        write!(f, "  loess_accuracy:        {:e}", self.loess_accuracy)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for [`DetectorConfig`].
#[derive(Debug, Clone, Default)]
pub struct DetectorConfigBuilder {
    /// Advisory maximum order.
    pub max_order: Option<usize>,

    /// Angular step in degrees.
    pub degree_sampling: Option<f64>,

    /// Peak threshold in degrees.
    pub epsilon: Option<f64>,

    /// Smoothing fraction (0..1].
    pub bandwidth: Option<f64>,

    /// Robustness iterations.
    pub robustness_iterations: Option<usize>,

    /// Smoother convergence tolerance.
    pub loess_accuracy: Option<f64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl DetectorConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the advisory maximum order.
    pub fn max_order(mut self, max_order: usize) -> Self {
        if self.max_order.is_some() {
            self.duplicate_param = Some("max_order");
        }
        self.max_order = Some(max_order);
        self
    }

    /// Set the angular step in degrees.
    pub fn degree_sampling(mut self, step: f64) -> Self {
        if self.degree_sampling.is_some() {
            self.duplicate_param = Some("degree_sampling");
        }
        self.degree_sampling = Some(step);
        self
    }

    /// Set the peak threshold in degrees.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        if self.epsilon.is_some() {
            self.duplicate_param = Some("epsilon");
        }
        self.epsilon = Some(epsilon);
        self
    }

    /// Set the smoothing fraction (bandwidth).
    pub fn bandwidth(mut self, bandwidth: f64) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Set the number of robustness iterations.
    pub fn robustness_iterations(mut self, iterations: usize) -> Self {
        if self.robustness_iterations.is_some() {
            self.duplicate_param = Some("robustness_iterations");
        }
        self.robustness_iterations = Some(iterations);
        self
    }

    /// Set the smoother convergence tolerance.
    pub fn loess_accuracy(mut self, accuracy: f64) -> Self {
        if self.loess_accuracy.is_some() {
            self.duplicate_param = Some("loess_accuracy");
        }
        self.loess_accuracy = Some(accuracy);
        self
    }

    /// Validate every parameter and build the configuration.
    pub fn build(self) -> Result<DetectorConfig, ConfigurationError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let max_order = self.max_order.unwrap_or(DEFAULT_MAX_ORDER);
        let degree_sampling = self.degree_sampling.unwrap_or(DEFAULT_DEGREE_SAMPLING);
        let epsilon = self.epsilon.unwrap_or(DEFAULT_EPSILON);
        let bandwidth = self.bandwidth.unwrap_or(DEFAULT_BANDWIDTH);
        let robustness_iterations = self
            .robustness_iterations
            .unwrap_or(DEFAULT_ROBUSTNESS_ITERATIONS);
        let loess_accuracy = self.loess_accuracy.unwrap_or(DEFAULT_LOESS_ACCURACY);

        Validator::validate_max_order(max_order)?;
        Validator::validate_degree_sampling(degree_sampling)?;
        Validator::validate_epsilon(epsilon)?;
        Validator::validate_config_bandwidth(bandwidth)?;
        Validator::validate_robustness_iterations(robustness_iterations)?;
        Validator::validate_loess_accuracy(loess_accuracy)?;

        Ok(DetectorConfig {
            max_order,
            degree_sampling,
            epsilon,
            bandwidth,
            robustness_iterations,
            loess_accuracy,
        })
    }
}

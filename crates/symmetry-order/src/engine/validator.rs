//! Input validation for smoothing inputs and detector configuration.
//!
//! ## Purpose
//!
//! This module checks the requirements every stage relies on: matched
//! lengths, finite values, increasing angles, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Signal checks are generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::{ConfigurationError, SmoothingError};

/// Upper bound on robustness iterations.
pub const MAX_ROBUSTNESS_ITERATIONS: usize = 1000;

/// Upper bound on samples per revolution (a 0.0001° step).
pub const MAX_SAMPLES: usize = 3_600_001;

// Guard against round-off when 360 / step lands just below an integer.
const STEP_ROUNDING_GUARD: f64 = 1e-9;

/// Validation utility for smoothing inputs and configuration parameters.
///
/// All methods fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Signal Validation
    // ========================================================================

    /// Validate an angle/metric signal for smoothing.
    pub fn validate_signal<T: Float>(angles: &[T], metrics: &[T]) -> Result<(), SmoothingError> {
        // Check 1: Non-empty arrays
        if angles.is_empty() || metrics.is_empty() {
            return Err(SmoothingError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = angles.len();
        if n != metrics.len() {
            return Err(SmoothingError::MismatchedInputs {
                x_len: n,
                y_len: metrics.len(),
            });
        }

        // Check 3: All values finite
        for i in 0..n {
            if !angles[i].is_finite() {
                return Err(SmoothingError::InvalidNumericValue(format!(
                    "angles[{}]={}",
                    i,
                    angles[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !metrics[i].is_finite() {
                return Err(SmoothingError::InvalidNumericValue(format!(
                    "metrics[{}]={}",
                    i,
                    metrics[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Check 4: Strictly increasing angles
        if let Some(i) = (1..n).find(|&i| angles[i] <= angles[i - 1]) {
            return Err(SmoothingError::NotStrictlyIncreasing { index: i });
        }

        Ok(())
    }

    /// Validate the smoothing bandwidth.
    pub fn validate_bandwidth<T: Float>(bandwidth: T) -> Result<(), SmoothingError> {
        if !Self::in_unit_interval(bandwidth) {
            return Err(SmoothingError::InvalidBandwidth(
                bandwidth.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the convergence accuracy.
    pub fn validate_accuracy<T: Float>(accuracy: T) -> Result<(), SmoothingError> {
        if !accuracy.is_finite() || accuracy <= T::zero() {
            return Err(SmoothingError::InvalidAccuracy(
                accuracy.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// Validate the advisory maximum order.
    pub fn validate_max_order(max_order: usize) -> Result<(), ConfigurationError> {
        if max_order == 0 {
            return Err(ConfigurationError::InvalidMaxOrder(max_order));
        }
        Ok(())
    }

    /// Validate the angular sampling step in degrees.
    pub fn validate_degree_sampling(step: f64) -> Result<(), ConfigurationError> {
        if !Self::is_valid_step(step) {
            return Err(ConfigurationError::InvalidDegreeSampling(step));
        }
        Ok(())
    }

    /// Validate the peak threshold.
    pub fn validate_epsilon(epsilon: f64) -> Result<(), ConfigurationError> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigurationError::InvalidEpsilon(epsilon));
        }
        Ok(())
    }

    /// Validate the configured bandwidth.
    pub fn validate_config_bandwidth(bandwidth: f64) -> Result<(), ConfigurationError> {
        if !Self::in_unit_interval(bandwidth) {
            return Err(ConfigurationError::InvalidBandwidth(bandwidth));
        }
        Ok(())
    }

    /// Validate the number of robustness iterations.
    ///
    /// 0 iterations means initial fit only.
    pub fn validate_robustness_iterations(iterations: usize) -> Result<(), ConfigurationError> {
        if iterations > MAX_ROBUSTNESS_ITERATIONS {
            return Err(ConfigurationError::InvalidRobustnessIterations(iterations));
        }
        Ok(())
    }

    /// Validate the configured LOESS accuracy.
    pub fn validate_loess_accuracy(accuracy: f64) -> Result<(), ConfigurationError> {
        if !accuracy.is_finite() || accuracy <= 0.0 {
            return Err(ConfigurationError::InvalidAccuracy(accuracy));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ConfigurationError> {
        if let Some(parameter) = duplicate_param {
            return Err(ConfigurationError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    // ========================================================================
    // Shared Predicates
    // ========================================================================

    /// Whether `step` is a usable angular step in degrees: in (0, 360] and
    /// yielding at most [`MAX_SAMPLES`] samples per revolution.
    #[inline]
    pub fn is_valid_step(step: f64) -> bool {
        step.is_finite()
            && step > 0.0
            && step <= 360.0
            && Self::samples_per_revolution(step) <= MAX_SAMPLES as f64
    }

    /// `floor(360 / step) + 1`, kept in floating point so tiny steps cannot
    /// overflow the cast.
    #[inline]
    pub fn samples_per_revolution(step: f64) -> f64 {
        (360.0 / step + STEP_ROUNDING_GUARD).floor() + 1.0
    }

    #[inline]
    fn in_unit_interval<T: Float>(value: T) -> bool {
        value.is_finite() && value > T::zero() && value <= T::one()
    }
}

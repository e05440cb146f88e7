//! Layer 5: Detector
//!
//! ## Purpose
//!
//! This module estimates the rotational symmetry order of a superposition.
//! It runs the three stages in sequence: rotation sampling, LOESS smoothing,
//! and peak counting, and reports the number of peaks as the order.
//!
//! ## Design notes
//!
//! * **Stateless**: A detector holds only its configuration and metric, so a
//!   single instance can serve concurrent calls.
//! * **Single error kind**: Any stage failure is wrapped in
//!   [`OrderDetectionFailedError`], with the stage error kept as its source.
//! * **Open to strategies**: [`DetectionStrategy`] is the closed set of
//!   detectors; each variant implements [`OrderDetector`].
//!
//! ## Non-goals
//!
//! * Choosing the symmetry axis or aligning the structures.
//! * Clamping the result to `max_order`.

// External dependencies
use log::{debug, info, warn};

// Internal dependencies
use crate::algorithms::peaks::count_peaks;
use crate::api::DetectorConfig;
use crate::engine::sampler::sample;
use crate::engine::smoother::smooth;
use crate::geometry::axis::RotationAxis;
use crate::geometry::metric::Metric;
use crate::geometry::point::CoordinateSet;
use crate::primitives::errors::OrderDetectionFailedError;

// ============================================================================
// Detector Trait
// ============================================================================

/// Estimates the rotational symmetry order about a given axis.
pub trait OrderDetector {
    /// Estimate the order for reference set `coords_a` and the aligned set
    /// `coords_b` about `axis`.
    fn calculate_order(
        &self,
        coords_a: &CoordinateSet,
        coords_b: &CoordinateSet,
        axis: &RotationAxis,
    ) -> Result<usize, OrderDetectionFailedError>;
}

// ============================================================================
// Peak Counting Detector
// ============================================================================

/// Detector that counts maxima of the smoothed deviation-vs-angle curve.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeakCountingDetector {
    config: DetectorConfig,
    metric: Metric,
}

impl PeakCountingDetector {
    /// Create a detector with the default nearest-neighbour metric.
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            metric: Metric::default(),
        }
    }

    /// Replace the deviation metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// The detector configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// The deviation metric.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    fn run(
        &self,
        coords_a: &CoordinateSet,
        coords_b: &CoordinateSet,
        axis: &RotationAxis,
    ) -> Result<usize, OrderDetectionFailedError> {
        let config = &self.config;

        info!("Calculating rotation samples");
        let series = sample(
            coords_a,
            coords_b,
            axis,
            config.degree_sampling(),
            &self.metric,
        )?;
        debug!(
            "Sampled {} angles with {} metric",
            series.len(),
            self.metric.name()
        );

        info!("Smoothing with LOESS");
        let smoothed = smooth(
            &series.angles,
            &series.metrics,
            config.bandwidth(),
            config.robustness_iterations(),
            config.loess_accuracy(),
        )?;
        debug!(
            "Smoothed {} points using {} robustness iteration(s)",
            smoothed.len(),
            smoothed.iterations_used
        );

        info!("Counting peaks");
        let peaks = count_peaks(&smoothed.values, config.epsilon().to_radians());
        info!("Found {} peaks", peaks);

        Ok(peaks)
    }
}

impl OrderDetector for PeakCountingDetector {
    fn calculate_order(
        &self,
        coords_a: &CoordinateSet,
        coords_b: &CoordinateSet,
        axis: &RotationAxis,
    ) -> Result<usize, OrderDetectionFailedError> {
        self.run(coords_a, coords_b, axis).inspect_err(|err| {
            warn!("{}", err);
        })
    }
}

// ============================================================================
// Strategy Selection
// ============================================================================

/// The available order detection strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetectionStrategy {
    /// Count maxima of the smoothed deviation curve.
    PeakCounting(PeakCountingDetector),
}

impl Default for DetectionStrategy {
    fn default() -> Self {
        DetectionStrategy::PeakCounting(PeakCountingDetector::default())
    }
}

impl From<PeakCountingDetector> for DetectionStrategy {
    fn from(detector: PeakCountingDetector) -> Self {
        DetectionStrategy::PeakCounting(detector)
    }
}

impl OrderDetector for DetectionStrategy {
    fn calculate_order(
        &self,
        coords_a: &CoordinateSet,
        coords_b: &CoordinateSet,
        axis: &RotationAxis,
    ) -> Result<usize, OrderDetectionFailedError> {
        match self {
            DetectionStrategy::PeakCounting(detector) => {
                detector.calculate_order(coords_a, coords_b, axis)
            }
        }
    }
}

/// Estimate the order with a peak-counting detector and the default metric.
pub fn calculate_order(
    coords_a: &CoordinateSet,
    coords_b: &CoordinateSet,
    axis: &RotationAxis,
    config: &DetectorConfig,
) -> Result<usize, OrderDetectionFailedError> {
    PeakCountingDetector::new(*config).calculate_order(coords_a, coords_b, axis)
}

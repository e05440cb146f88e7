//! Angle-indexed signal containers.
//!
//! ## Purpose
//!
//! [`SampleSeries`] holds the raw deviation-vs-angle signal produced by the
//! rotation sampler; [`SmoothedSeries`] holds the LOESS estimate over the same
//! angle axis. Both are created and consumed within a single detection call.
//!
//! ## Invariants
//!
//! * `angles` and the value vector always have the same length.
//! * Sampled angles start at 0, are strictly increasing, and end at or
//!   before 2π.
//! * Robustness weights are always in [0, 1].

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Number of head/tail rows printed when a series is too long to show in full.
const DISPLAY_EDGE_ROWS: usize = 10;

// ============================================================================
// Sample Series
// ============================================================================

/// Raw deviation metric sampled at fixed angular steps about an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries<T> {
    /// Rotation angles in radians.
    pub angles: Vec<T>,

    /// Deviation metric at each angle.
    pub metrics: Vec<T>,
}

impl<T: Float> SampleSeries<T> {
    /// Pair up angles and metrics.
    pub fn new(angles: Vec<T>, metrics: Vec<T>) -> Self {
        debug_assert_eq!(angles.len(), metrics.len());
        Self { angles, metrics }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }
}

// ============================================================================
// Smoothed Series
// ============================================================================

/// LOESS estimate of a sampled signal.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedSeries<T> {
    /// Rotation angles in radians (copied from the input).
    pub angles: Vec<T>,

    /// Denoised metric estimates.
    pub values: Vec<T>,

    /// Final robustness weights from the iterative refinement.
    pub robustness_weights: Vec<T>,

    /// Robustness iterations actually performed (0 means initial fit only).
    pub iterations_used: usize,
}

impl<T: Float> SmoothedSeries<T> {
    /// Number of smoothed points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of absolute differences between consecutive values.
    pub fn total_variation(&self) -> T {
        total_variation(&self.values)
    }
}

/// Sum of absolute differences between consecutive values.
pub fn total_variation<T: Float>(values: &[T]) -> T {
    values
        .windows(2)
        .fold(T::zero(), |acc, pair| acc + (pair[1] - pair[0]).abs())
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for SmoothedSeries<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f, "  Iterations:  {}", self.iterations_used)?;
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;
        writeln!(f, "{:>10} {:>12} {:>10}", "Angle", "Value", "Rob_Weight")?;
        writeln!(f, "{:-<34}", "")?;

        let n = self.len();
        let rows: Vec<usize> = if n <= 2 * DISPLAY_EDGE_ROWS {
            (0..n).collect()
        } else {
            (0..DISPLAY_EDGE_ROWS)
                .chain(n - DISPLAY_EDGE_ROWS..n)
                .collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>10.4} {:>12.6} {:>10.4}",
                self.angles[idx], self.values[idx], self.robustness_weights[idx]
            )?;
        }

        Ok(())
    }
}

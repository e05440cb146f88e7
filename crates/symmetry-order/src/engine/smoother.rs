//! Robust LOESS smoothing of a sampled signal.
//!
//! ## Purpose
//!
//! This module drives the smoothing passes: a local linear fit at every point
//! using its `ceil(bandwidth * n)` nearest neighbours, followed by optional
//! robustness iterations that downweight points with large residuals.
//!
//! ## Design notes
//!
//! * The angle axis is treated as a plain ordered axis; windows never wrap
//!   around 2π.
//! * Working memory comes from a [`SmoothingBuffer`] allocated once per call
//!   (or supplied by the caller) and recycled across iterations.
//! * Deterministic: identical inputs always give bit-identical output.
//!
//! ## Key concepts
//!
//! * **Initial pass**: kernel weights only.
//! * **Robustness pass**: kernel × bisquare weights from the previous
//!   residuals.
//! * **Early exit**: iteration stops when the residual scale falls below
//!   `accuracy` (the fit is already exact) or when the largest relative change
//!   of the fitted curve falls below `accuracy`.
//!
//! ## Invariants
//!
//! * Output has the same length and angle axis as the input.
//! * The local window holds at least 2 points.
//!
//! ## Non-goals
//!
//! * This module does not sort its input; angles must already increase.
//! * This module does not count peaks or interpret the curve.

// External dependencies
use log::debug;

// Internal dependencies
use crate::algorithms::regression::{RegressionContext, WLSSolver};
use crate::algorithms::robustness::{apply_bisquare_weights, residual_scale};
use crate::engine::validator::Validator;
use crate::primitives::buffer::SmoothingBuffer;
use crate::primitives::errors::SmoothingError;
use crate::primitives::series::SmoothedSeries;
use crate::primitives::window::Window;

/// Smallest local window that can support a line.
pub const MIN_WINDOW_POINTS: usize = 2;

/// Smooth `metrics` over `angles` with robust LOESS.
pub fn smooth<T: WLSSolver>(
    angles: &[T],
    metrics: &[T],
    bandwidth: T,
    robustness_iterations: usize,
    accuracy: T,
) -> Result<SmoothedSeries<T>, SmoothingError> {
    LoessSmoother::new(bandwidth, robustness_iterations, accuracy).run(angles, metrics, None)
}

/// Robust locally weighted linear regression smoother.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoessSmoother<T> {
    /// Fraction of points used per local fit, in (0, 1].
    pub bandwidth: T,

    /// Number of robustness iterations after the initial fit.
    pub robustness_iterations: usize,

    /// Convergence tolerance.
    pub accuracy: T,
}

impl<T: WLSSolver> LoessSmoother<T> {
    /// Create a smoother.
    pub fn new(bandwidth: T, robustness_iterations: usize, accuracy: T) -> Self {
        Self {
            bandwidth,
            robustness_iterations,
            accuracy,
        }
    }

    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Smooth a signal, optionally reusing a caller-owned buffer.
    pub fn run(
        &self,
        x: &[T],
        y: &[T],
        buffer: Option<&mut SmoothingBuffer<T>>,
    ) -> Result<SmoothedSeries<T>, SmoothingError> {
        Validator::validate_bandwidth(self.bandwidth)?;
        Validator::validate_accuracy(self.accuracy)?;
        Validator::validate_signal(x, y)?;

        let n = x.len();
        let window_size = Window::span_from_bandwidth(n, self.bandwidth);
        if window_size < MIN_WINDOW_POINTS {
            return Err(SmoothingError::TooFewPoints {
                got: window_size,
                min: MIN_WINDOW_POINTS,
            });
        }

        let mut internal_buffer;
        let buf = match buffer {
            Some(b) => b,
            None => {
                internal_buffer = SmoothingBuffer::with_capacity(n);
                &mut internal_buffer
            }
        };
        buf.prepare(n);

        // Initial fit
        Self::smooth_pass(x, y, window_size, None, &mut buf.weights, &mut buf.fitted)?;

        let mut iterations_used = 0;
        for iter in 1..=self.robustness_iterations {
            for i in 0..n {
                buf.residuals[i] = y[i] - buf.fitted[i];
            }

            let scale = residual_scale(&buf.residuals, &mut buf.scratch);
            if scale < self.accuracy {
                debug!("LOESS residual scale below accuracy after {} iteration(s)", iter - 1);
                break;
            }

            apply_bisquare_weights(&buf.residuals, scale, &mut buf.robustness_weights);

            buf.rotate_fits();
            Self::smooth_pass(
                x,
                y,
                window_size,
                Some(buf.robustness_weights.as_slice()),
                &mut buf.weights,
                &mut buf.fitted,
            )?;
            iterations_used = iter;

            if Self::check_convergence(&buf.fitted, &buf.previous, self.accuracy) {
                debug!("LOESS converged after {} iteration(s)", iter);
                break;
            }
        }

        Ok(SmoothedSeries {
            angles: x.to_vec(),
            values: buf.fitted.clone(),
            robustness_weights: buf.robustness_weights.clone(),
            iterations_used,
        })
    }

    // ========================================================================
    // Main Algorithmic Logic
    // ========================================================================

    /// Fit every point once, writing the estimates to `fitted`.
    pub fn smooth_pass(
        x: &[T],
        y: &[T],
        window_size: usize,
        robustness_weights: Option<&[T]>,
        weights: &mut [T],
        fitted: &mut [T],
    ) -> Result<(), SmoothingError> {
        let n = x.len();
        let mut window = Window::initialize(0, window_size, n);

        for idx in 0..n {
            window.recenter(x, idx);

            let mut ctx = RegressionContext {
                x,
                y,
                idx,
                window,
                robustness_weights,
                weights: &mut *weights,
            };

            fitted[idx] = ctx.fit()?;
        }

        Ok(())
    }

    /// Whether the largest relative change between two fits is below `tolerance`.
    ///
    /// Where the previous value is zero the absolute change is used.
    pub fn check_convergence(current: &[T], previous: &[T], tolerance: T) -> bool {
        let max_change = current
            .iter()
            .zip(previous)
            .fold(T::zero(), |maxv, (&cur, &prev)| {
                let diff = (cur - prev).abs();
                let change = if prev != T::zero() {
                    diff / prev.abs()
                } else {
                    diff
                };
                maxv.max(change)
            });

        max_change < tolerance
    }
}

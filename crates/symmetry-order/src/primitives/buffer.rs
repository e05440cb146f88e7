//! Working memory for the LOESS smoother.
//!
//! ## Purpose
//!
//! A single smoothing call needs several length-`n` scratch arrays: the
//! current and previous fitted curves, residuals, robustness weights, kernel
//! weights, and a scratch copy for median selection. They are allocated once
//! per call and recycled across robustness iterations.
//!
//! ## Invariants
//!
//! * After `prepare(n)` every slot has length exactly `n`.
//! * Robustness weights start at 1.0 (no downweighting).
//!
//! ## Non-goals
//!
//! * Sharing a buffer between threads; each call owns its buffer.

// External dependencies
use core::mem::swap;
use num_traits::Float;

/// Scratch space for one smoothing call.
#[derive(Debug, Clone, Default)]
pub struct SmoothingBuffer<T> {
    /// Fitted values of the current pass.
    pub fitted: Vec<T>,

    /// Fitted values of the previous pass (convergence check).
    pub previous: Vec<T>,

    /// Residuals `y - fitted`.
    pub residuals: Vec<T>,

    /// Robustness weights in [0, 1].
    pub robustness_weights: Vec<T>,

    /// Kernel (or combined) weights of the current local fit.
    pub weights: Vec<T>,

    /// Scratch copy used for in-place median selection.
    pub scratch: Vec<T>,
}

impl<T: Float> SmoothingBuffer<T> {
    /// Allocate a buffer for `n` points.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            fitted: Vec::with_capacity(n),
            previous: Vec::with_capacity(n),
            residuals: Vec::with_capacity(n),
            robustness_weights: Vec::with_capacity(n),
            weights: Vec::with_capacity(n),
            scratch: Vec::with_capacity(n),
        }
    }

    /// Reset every slot to length `n`.
    pub fn prepare(&mut self, n: usize) {
        reset(&mut self.fitted, n, T::zero());
        reset(&mut self.previous, n, T::zero());
        reset(&mut self.residuals, n, T::zero());
        reset(&mut self.robustness_weights, n, T::one());
        reset(&mut self.weights, n, T::zero());
        reset(&mut self.scratch, n, T::zero());
    }

    /// Keep the current fit as `previous` before the next pass overwrites it.
    #[inline]
    pub fn rotate_fits(&mut self) {
        swap(&mut self.fitted, &mut self.previous);
    }
}

#[inline]
fn reset<T: Copy>(slot: &mut Vec<T>, n: usize, value: T) {
    slot.clear();
    slot.resize(n, value);
}

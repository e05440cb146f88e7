//! Nearest-neighbour windows over a sorted angle axis.
//!
//! Each local fit uses the `w` points closest to the point being fitted,
//! measured on a plain ordered axis (no wrap-around at 2π).

// External dependencies
use num_traits::Float;

// Guard against round-off when a product lands just above an integer.
const SPAN_ROUNDING_GUARD: f64 = 1e-9;

// Inclusive window bounds `[left, right]` for a local fit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    // Left boundary index (inclusive).
    pub left: usize,

    // Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    // Initialize window boundaries for the point at `idx`.
    #[inline]
    pub fn initialize(idx: usize, window_size: usize, n: usize) -> Self {
        debug_assert!(
            window_size >= 1,
            "initialize_window: window_size must be at least 1"
        );

        if window_size >= n {
            return Self {
                left: 0,
                right: n.saturating_sub(1),
            };
        }

        let half = window_size / 2;
        let left = idx.saturating_sub(half).min(n - window_size);
        Self {
            left,
            right: left + window_size - 1,
        }
    }

    // Slide the window so that it holds the nearest neighbours of `current`.
    // On equal distances the left neighbour is kept.
    #[inline]
    pub fn recenter<T: Float>(&mut self, x: &[T], current: usize) {
        let n = x.len();
        debug_assert!(current < n, "recenter: current index out of bounds");

        let x_current = x[current];

        // Slide right while the point after the window is strictly closer
        // than the leftmost point.
        while self.right < n - 1 {
            let d_left = x_current - x[self.left];
            let d_right = x[self.right + 1] - x_current;

            if d_left <= d_right {
                break;
            }

            self.left += 1;
            self.right += 1;
        }

        // Slide left while the point before the window is strictly closer
        // than the rightmost point.
        while self.left > 0 {
            let d_left = x_current - x[self.left - 1];
            let d_right = x[self.right] - x_current;

            if d_right <= d_left {
                break;
            }

            self.left -= 1;
            self.right -= 1;
        }
    }

    // Distance from `x_current` to the farthest point in the window.
    #[inline]
    pub fn max_distance<T: Float>(&self, x: &[T], x_current: T) -> T {
        T::max(x_current - x[self.left], x[self.right] - x_current)
    }

    // Points per local window: `ceil(bandwidth * n)`, capped at `n`.
    #[inline]
    pub fn span_from_bandwidth<T: Float>(n: usize, bandwidth: T) -> usize {
        let guard = T::from(SPAN_ROUNDING_GUARD).unwrap_or_else(T::zero);
        let scaled = bandwidth * T::from(n).unwrap_or_else(T::zero) - guard;
        let span = scaled.ceil().to_usize().unwrap_or(0);
        span.min(n)
    }

    // Get the number of points in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    #[allow(dead_code)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Weighted local linear regression.
//!
//! ## Purpose
//!
//! This module fits the straight line behind every LOESS estimate: a
//! weighted least squares (WLS) line through the window of neighbours of one
//! point, evaluated at that point.
//!
//! ## Design notes
//!
//! * Sums are accumulated on x-values centred at the point being fitted, so
//!   the estimate is simply the intercept of the centred line.
//! * `f64` accumulation is SIMD-vectorized; other `Float` types use the
//!   scalar path.
//! * A window whose weighted x-variance vanishes (e.g. only the point itself
//!   carries weight) degenerates to the weighted mean.
//!
//! ## Invariants
//!
//! * A window with zero total weight has no solution and is reported as
//!   [`SmoothingError::SingularFit`].

// External dependencies
use num_traits::Float;
use wide::f64x2;

// Internal dependencies
use crate::math::kernel::compute_window_weights;
use crate::primitives::errors::SmoothingError;
use crate::primitives::window::Window;

// ============================================================================
// Accumulation
// ============================================================================

/// Weighted sums `(Σw, Σw·dx, Σw·y, Σw·dx², Σw·dx·y)` with `dx = x - origin`.
pub type WlsSums<T> = (T, T, T, T, T);

/// Scalar accumulation for 1D weighted least squares (generic Float).
#[inline]
pub fn accumulate_wls_scalar<T: Float>(x: &[T], y: &[T], weights: &[T], origin: T) -> WlsSums<T> {
    let mut sum_w = T::zero();
    let mut sum_wx = T::zero();
    let mut sum_wy = T::zero();
    let mut sum_wxx = T::zero();
    let mut sum_wxy = T::zero();

    for ((&xi, &yi), &w) in x.iter().zip(y).zip(weights) {
        let dx = xi - origin;
        let wx = w * dx;

        sum_w = sum_w + w;
        sum_wx = sum_wx + wx;
        sum_wy = sum_wy + w * yi;
        sum_wxx = sum_wxx + wx * dx;
        sum_wxy = sum_wxy + wx * yi;
    }

    (sum_w, sum_wx, sum_wy, sum_wxx, sum_wxy)
}

/// SIMD-optimized accumulation for 1D weighted least squares (f64).
#[inline]
pub fn accumulate_wls_simd_f64(x: &[f64], y: &[f64], weights: &[f64], origin: f64) -> WlsSums<f64> {
    let n = x.len().min(y.len()).min(weights.len());
    let o = f64x2::splat(origin);

    let mut s_w = f64x2::splat(0.0);
    let mut s_wx = f64x2::splat(0.0);
    let mut s_wy = f64x2::splat(0.0);
    let mut s_wxx = f64x2::splat(0.0);
    let mut s_wxy = f64x2::splat(0.0);

    let pairs = n / 2;
    for k in 0..pairs {
        let i = 2 * k;
        let w = f64x2::new([weights[i], weights[i + 1]]);
        let dx = f64x2::new([x[i], x[i + 1]]) - o;
        let y_val = f64x2::new([y[i], y[i + 1]]);

        let wx = w * dx;

        s_w += w;
        s_wx += wx;
        s_wy += w * y_val;
        s_wxx += wx * dx;
        s_wxy += wx * y_val;
    }

    let tail = accumulate_wls_scalar(&x[2 * pairs..n], &y[2 * pairs..n], &weights[2 * pairs..n], origin);

    (
        s_w.reduce_add() + tail.0,
        s_wx.reduce_add() + tail.1,
        s_wy.reduce_add() + tail.2,
        s_wxx.reduce_add() + tail.3,
        s_wxy.reduce_add() + tail.4,
    )
}

// ============================================================================
// Solver Trait
// ============================================================================

/// Type-specific weighted least squares accumulation.
pub trait WLSSolver: Float {
    /// Accumulate weighted statistics centred at `origin`.
    #[inline]
    fn accumulate_wls(x: &[Self], y: &[Self], weights: &[Self], origin: Self) -> WlsSums<Self> {
        accumulate_wls_scalar(x, y, weights, origin)
    }
}

impl WLSSolver for f64 {
    #[inline]
    fn accumulate_wls(x: &[f64], y: &[f64], weights: &[f64], origin: f64) -> WlsSums<f64> {
        accumulate_wls_simd_f64(x, y, weights, origin)
    }
}

impl WLSSolver for f32 {}

// ============================================================================
// LinearFit
// ============================================================================

/// Local line `y = intercept + slope * (x - origin)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Slope (beta_1).
    pub slope: T,

    /// Value of the line at `origin` (beta_0).
    pub intercept: T,

    /// Centre of the local coordinate system.
    pub origin: T,
}

impl<T: Float> LinearFit<T> {
    /// Predict the y-value at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * (x - self.origin)
    }

    /// Solve the WLS normal equations from accumulated sums.
    ///
    /// Returns `None` when the total weight is not positive. When the
    /// normalized weighted variance of `dx` is at or below `tol`, the slope is
    /// zero and the line is the weighted mean.
    pub fn from_sums(sums: WlsSums<T>, origin: T, tol: T) -> Option<Self> {
        let (sum_w, sum_wx, sum_wy, sum_wxx, sum_wxy) = sums;
        if sum_w <= T::zero() || !sum_w.is_finite() {
            return None;
        }

        let x_mean = sum_wx / sum_w;
        let y_mean = sum_wy / sum_w;
        let variance = sum_wxx / sum_w - x_mean * x_mean;

        if variance <= tol {
            return Some(Self {
                slope: T::zero(),
                intercept: y_mean,
                origin,
            });
        }

        let covariance = sum_wxy / sum_w - x_mean * y_mean;
        let slope = covariance / variance;
        Some(Self {
            slope,
            intercept: y_mean - slope * x_mean,
            origin,
        })
    }
}

impl<T: WLSSolver> LinearFit<T> {
    /// Fit a WLS line centred at `origin`.
    pub fn fit_wls(x: &[T], y: &[T], weights: &[T], origin: T, tol: T) -> Option<Self> {
        Self::from_sums(T::accumulate_wls(x, y, weights, origin), origin, tol)
    }
}

// ============================================================================
// Regression Context
// ============================================================================

/// Everything needed to fit a single point.
pub struct RegressionContext<'a, T> {
    /// Angles (independent variable), strictly increasing.
    pub x: &'a [T],

    /// Metric values (dependent variable).
    pub y: &'a [T],

    /// Index of the point to fit.
    pub idx: usize,

    /// Nearest-neighbour window for the local fit.
    pub window: Window,

    /// Robustness weights, or `None` on the initial pass.
    pub robustness_weights: Option<&'a [T]>,

    /// Scratch weights, written for the window range.
    pub weights: &'a mut [T],
}

impl<T: WLSSolver> RegressionContext<'_, T> {
    /// Fit the local line and evaluate it at `x[idx]`.
    pub fn fit(&mut self) -> Result<T, SmoothingError> {
        let Window { left, right } = self.window;
        let x_current = self.x[self.idx];
        let radius = self.window.max_distance(self.x, x_current);

        let mut weight_sum =
            compute_window_weights(self.x, left, right, x_current, radius, self.weights);

        if let Some(robustness) = self.robustness_weights {
            weight_sum = T::zero();
            for j in left..=right {
                let w = self.weights[j] * robustness[j];
                self.weights[j] = w;
                weight_sum = weight_sum + w;
            }
        }

        if weight_sum <= T::zero() {
            return Err(SmoothingError::SingularFit { index: self.idx });
        }

        // Variance tolerance scales with the squared window radius.
        let tol = T::epsilon() * radius * radius;

        LinearFit::fit_wls(
            &self.x[left..=right],
            &self.y[left..=right],
            &self.weights[left..=right],
            x_current,
            tol,
        )
        .map(|line| line.predict(x_current))
        .ok_or(SmoothingError::SingularFit { index: self.idx })
    }
}

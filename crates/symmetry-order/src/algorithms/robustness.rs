//! Robustness weight computation for outlier downweighting.
//!
//! ## Purpose
//!
//! After a LOESS pass, residuals are turned into per-point weights so that
//! points with unusually large residuals pull less on the next pass
//! (iteratively reweighted least squares).
//!
//! ## Key concepts
//!
//! * **Scale**: `s = median(|r|)`, the median absolute residual.
//! * **Bisquare**: `w = (1 - (r / (6s))^2)^2` for `|r| < 6s`, else 0
//!   (Cleveland, 1979).
//!
//! ## Invariants
//!
//! * Robustness weights are in [0, 1].
//!
//! ## Non-goals
//!
//! * This module does not perform the regression itself.
//! * This module does not decide when to stop iterating.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::median_absolute;

/// Tuning constant applied to the median absolute residual.
pub const BISQUARE_TUNING: f64 = 6.0;

/// Median absolute residual; `scratch` must be as long as `residuals`.
pub fn residual_scale<T: Float>(residuals: &[T], scratch: &mut [T]) -> T {
    scratch.copy_from_slice(residuals);
    median_absolute(scratch)
}

/// Overwrite `weights` with bisquare weights for `residuals` at scale `scale`.
///
/// A non-positive scale means every residual is zero; all weights become 1.
pub fn apply_bisquare_weights<T: Float>(residuals: &[T], scale: T, weights: &mut [T]) {
    if scale <= T::zero() {
        weights.iter_mut().for_each(|w| *w = T::one());
        return;
    }

    let c = T::from(BISQUARE_TUNING).unwrap_or_else(T::one) * scale;
    for (w, &r) in weights.iter_mut().zip(residuals) {
        *w = bisquare_weight(r / c);
    }
}

/// Bisquare weight at scaled residual `u`.
#[inline]
pub fn bisquare_weight<T: Float>(u: T) -> T {
    let u = u.abs();
    if u >= T::one() {
        return T::zero();
    }
    let tmp = T::one() - u * u;
    tmp * tmp
}

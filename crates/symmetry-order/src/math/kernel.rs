//! Tricube kernel weights for local regression.
//!
//! ## Purpose
//!
//! The kernel maps the distance between a neighbour and the point being
//! fitted to a weight, so that close neighbours dominate the local line.
//!
//! ## Key concepts
//!
//! * **Normalized distance**: `u = d / d_max`, where `d_max` is the distance to
//!   the farthest point of the window.
//! * **Tricube**: `K(u) = (1 - u^3)^3` for `u < 1`, zero otherwise.
//!
//! ## Invariants
//!
//! * Weights are in [0, 1]; the point itself (`u = 0`) gets weight 1.
//! * The farthest window point (`u = 1`) gets weight exactly 0.

// External dependencies
use num_traits::Float;

/// Tricube kernel evaluated at normalized distance `u`.
#[inline]
pub fn tricube<T: Float>(u: T) -> T {
    let u = u.abs();
    if u >= T::one() {
        return T::zero();
    }
    let tmp = T::one() - u * u * u;
    tmp * tmp * tmp
}

/// Fill `weights[left..=right]` with tricube weights around `x_current`.
///
/// Returns the sum of the weights written. When `max_distance` is zero every
/// window point coincides with `x_current` and gets weight 1.
#[inline]
pub fn compute_window_weights<T: Float>(
    x: &[T],
    left: usize,
    right: usize,
    x_current: T,
    max_distance: T,
    weights: &mut [T],
) -> T {
    let mut sum = T::zero();

    if max_distance <= T::zero() {
        for w in &mut weights[left..=right] {
            *w = T::one();
            sum = sum + T::one();
        }
        return sum;
    }

    for j in left..=right {
        let u = (x[j] - x_current).abs() / max_distance;
        let w = tricube(u);
        weights[j] = w;
        sum = sum + w;
    }

    sum
}

//! Robust scale estimation for residuals.
//!
//! The robustness step scales residuals by their median absolute value,
//! which is insensitive to the very outliers it is meant to detect.
//! Medians are computed in place with quickselect.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Median absolute residual `median(|r|)`; `vals` is overwritten.
pub fn median_absolute<T: Float>(vals: &mut [T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }

    for val in vals.iter_mut() {
        *val = val.abs();
    }

    median_inplace(vals)
}

// Median using quickselect; even lengths average the two middle values.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 1 {
        return upper;
    }

    // After selection the lower half holds values <= upper; take its maximum.
    let lower = vals[..mid]
        .iter()
        .copied()
        .fold(T::neg_infinity(), T::max);
    (lower + upper) / (T::one() + T::one())
}

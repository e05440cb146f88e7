//! Peak counting on a smoothed deviation curve.
//!
//! ## Purpose
//!
//! The number of local maxima in the deviation-vs-angle curve is used as the
//! estimate of the rotational symmetry order.
//!
//! ## Key concepts
//!
//! * A peak is counted when a strict decrease directly follows a strict
//!   increase. Equal consecutive values break an increase.
//! * The first value is the starting reference and can never count as an
//!   increase.
//!
//! ## Known limitations
//!
//! * The curve is scanned as an open interval, not a circle. A maximum that
//!   sits on the 0/2π boundary is never counted, so a curve whose true
//!   maxima include angle 0 is undercounted by one.
//! * `epsilon` is accepted but does not gate the comparisons: differences
//!   smaller than `epsilon` still count as increases and decreases.

// External dependencies
use num_traits::Float;

/// Count local maxima in `values`.
pub fn count_peaks<T: Float>(values: &[T], _epsilon: T) -> usize {
    let Some(&first) = values.first() else {
        return 0;
    };

    let mut n_peaks = 0;
    let mut previously_increased = false;
    let mut previous = first;

    for &value in values {
        if previously_increased && value < previous {
            n_peaks += 1;
        }
        previously_increased = value > previous;
        previous = value;
    }

    n_peaks
}

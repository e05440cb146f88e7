//! Rotation sampling of a deviation signal.
//!
//! ## Purpose
//!
//! Rotate one half of an aligned coordinate set about the symmetry axis in
//! fixed angular steps over one full revolution, and record how far the
//! rotated copy deviates from the reference half at each step.
//!
//! ## Invariants
//!
//! * The series has `floor(360 / step) + 1` samples, at most
//!   [`MAX_SAMPLES`](crate::engine::validator::MAX_SAMPLES).
//! * Angles are in radians, start at 0, are strictly increasing, and never
//!   exceed 2π.
//! * Inputs are never mutated.

// External dependencies
use core::f64::consts::TAU;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::geometry::axis::RotationAxis;
use crate::geometry::metric::DeviationMetric;
use crate::geometry::point::CoordinateSet;
use crate::primitives::errors::GeometryError;
use crate::primitives::series::SampleSeries;

/// Number of samples taken for a given step in degrees.
pub fn sample_count(step_degrees: f64) -> Result<usize, GeometryError> {
    if !Validator::is_valid_step(step_degrees) {
        return Err(GeometryError::InvalidStep(step_degrees));
    }
    Ok(Validator::samples_per_revolution(step_degrees) as usize)
}

/// Sample `metric(coords_a, rotate(coords_b, angle))` over one revolution.
///
/// `coords_a` is the fixed reference; `coords_b` is rotated about `axis` by
/// `k * step_degrees` for `k = 0..=floor(360 / step_degrees)`.
pub fn sample<M>(
    coords_a: &CoordinateSet,
    coords_b: &CoordinateSet,
    axis: &RotationAxis,
    step_degrees: f64,
    metric: &M,
) -> Result<SampleSeries<f64>, GeometryError>
where
    M: DeviationMetric + ?Sized,
{
    let n = sample_count(step_degrees)?;
    coords_a.validate_pair(coords_b)?;

    let mut angles = Vec::with_capacity(n);
    let mut metrics = Vec::with_capacity(n);

    for k in 0..n {
        let angle = (k as f64 * step_degrees).to_radians().min(TAU);
        let rotated = axis.rotate(coords_b, angle);
        metrics.push(metric.deviation(coords_a, &rotated)?);
        angles.push(angle);
    }

    Ok(SampleSeries::new(angles, metrics))
}

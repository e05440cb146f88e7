//! Deviation metrics between two coordinate sets.
//!
//! ## Purpose
//!
//! The rotation sampler needs a scalar measure of how far a rotated set is
//! from the reference set. Two measures are provided:
//!
//! * [`Rmsd`]: index-wise root mean square deviation. It assumes point `i` of
//!   one set corresponds to point `i` of the other.
//! * [`NearestNeighbor`]: mean distance from each reference point to the
//!   closest point of the other set. It ignores correspondence, so a set that
//!   maps onto itself under a symmetry operation (with its residues
//!   relabelled) scores zero. This is the default for order detection.
//!
//! ## Invariants
//!
//! * Both sets must be non-empty, finite, and of equal length.
//! * Metrics are non-negative and zero for identical sets.

// Internal dependencies
use crate::geometry::point::CoordinateSet;
use crate::primitives::errors::GeometryError;

/// Scalar structural difference between two equal-length coordinate sets.
pub trait DeviationMetric {
    /// Deviation of `b` from the reference `a`.
    fn deviation(&self, a: &CoordinateSet, b: &CoordinateSet) -> Result<f64, GeometryError>;
}

/// Index-wise root mean square deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rmsd;

impl DeviationMetric for Rmsd {
    fn deviation(&self, a: &CoordinateSet, b: &CoordinateSet) -> Result<f64, GeometryError> {
        a.validate_pair(b)?;
        Ok(rmsd_unchecked(a, b))
    }
}

/// Mean distance from each reference point to its nearest compared point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NearestNeighbor;

impl DeviationMetric for NearestNeighbor {
    fn deviation(&self, a: &CoordinateSet, b: &CoordinateSet) -> Result<f64, GeometryError> {
        a.validate_pair(b)?;
        Ok(nearest_neighbor_unchecked(a, b))
    }
}

/// Metric selection for detectors that must stay `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// Index-wise RMSD.
    Rmsd,

    /// Correspondence-free nearest-neighbour distance (default).
    #[default]
    NearestNeighbor,
}

impl Metric {
    /// Get the name of the metric.
    pub const fn name(&self) -> &'static str {
        match self {
            Metric::Rmsd => "RMSD",
            Metric::NearestNeighbor => "NearestNeighbor",
        }
    }
}

impl DeviationMetric for Metric {
    fn deviation(&self, a: &CoordinateSet, b: &CoordinateSet) -> Result<f64, GeometryError> {
        match self {
            Metric::Rmsd => Rmsd.deviation(a, b),
            Metric::NearestNeighbor => NearestNeighbor.deviation(a, b),
        }
    }
}

// ============================================================================
// Kernels (inputs already validated)
// ============================================================================

fn rmsd_unchecked(a: &CoordinateSet, b: &CoordinateSet) -> f64 {
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(p, q)| p.distance_squared_to(q))
        .sum();
    (sum / a.len() as f64).sqrt()
}

fn nearest_neighbor_unchecked(a: &CoordinateSet, b: &CoordinateSet) -> f64 {
    let sum: f64 = a
        .iter()
        .map(|p| {
            b.iter()
                .map(|q| p.distance_squared_to(q))
                .fold(f64::INFINITY, f64::min)
                .sqrt()
        })
        .sum();
    sum / a.len() as f64
}

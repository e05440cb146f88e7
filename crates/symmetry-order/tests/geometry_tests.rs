//! Tests for points, rotation axes and deviation metrics.
//!
//! ## Test Organization
//!
//! 1. **Points** - Vector arithmetic, centroid, validation
//! 2. **Rotation Axis** - Construction, Rodrigues rotation, immutability
//! 3. **Deviation Metrics** - RMSD, nearest neighbour, errors

use approx::assert_relative_eq;
use core::f64::consts::{FRAC_PI_2, PI};

use symmetry_order::prelude::*;

fn assert_point_eq(actual: Point3D, expected: Point3D) {
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-12);
    assert_relative_eq!(actual.y, expected.y, epsilon = 1e-12);
    assert_relative_eq!(actual.z, expected.z, epsilon = 1e-12);
}

// ============================================================================
// Point Tests
// ============================================================================

/// Test basic vector arithmetic.
#[test]
fn test_point_arithmetic() {
    let a = Point3D::new(1.0, 0.0, 0.0);
    let b = Point3D::new(0.0, 1.0, 0.0);

    assert_point_eq(a.cross(&b), Point3D::new(0.0, 0.0, 1.0));
    assert_relative_eq!(a.dot(&b), 0.0);
    assert_relative_eq!(a.distance_to(&b), 2f64.sqrt());
    assert_point_eq(a.add(&b).scale(2.0), Point3D::new(2.0, 2.0, 0.0));
    assert_point_eq(a.sub(&b), Point3D::new(1.0, -1.0, 0.0));
}

/// Test normalization.
///
/// Verifies that a zero vector cannot be normalized.
#[test]
fn test_point_normalize() {
    let v = Point3D::new(3.0, 0.0, 4.0).normalize().expect("non-zero vector");
    assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-12);
    assert_point_eq(v, Point3D::new(0.6, 0.0, 0.8));

    assert!(Point3D::zero().normalize().is_none());
}

/// Test centroid of a coordinate set.
#[test]
fn test_centroid() {
    let set: CoordinateSet = vec![
        Point3D::new(0.0, 0.0, 0.0),
        Point3D::new(2.0, 0.0, 0.0),
        Point3D::new(1.0, 3.0, 0.0),
    ]
    .into();

    assert_eq!(set.len(), 3);
    assert_point_eq(set.centroid(), Point3D::new(1.0, 1.0, 0.0));
}

/// Test coordinate set validation.
///
/// Verifies:
/// - Empty sets are rejected
/// - Non-finite coordinates are rejected
/// - Length mismatches are reported with both lengths
#[test]
fn test_coordinate_set_validation() {
    let empty = CoordinateSet::new(Vec::new());
    assert_eq!(empty.validate(), Err(GeometryError::EmptyCoordinates));

    let bad: CoordinateSet = vec![Point3D::new(0.0, f64::NAN, 0.0)].into();
    assert!(matches!(bad.validate(), Err(GeometryError::NonFinite(_))));

    let one: CoordinateSet = vec![Point3D::zero()].into();
    let two: CoordinateSet = vec![Point3D::zero(), Point3D::zero()].into();
    assert_eq!(
        one.validate_pair(&two),
        Err(GeometryError::MismatchedLengths { a_len: 1, b_len: 2 })
    );
}

// ============================================================================
// Rotation Axis Tests
// ============================================================================

/// Test a degenerate direction is rejected.
#[test]
fn test_axis_degenerate() {
    let result = RotationAxis::new(Point3D::new(1.0, 2.0, 3.0), Point3D::zero());
    assert_eq!(result, Err(GeometryError::DegenerateAxis));

    let result = RotationAxis::through_origin(Point3D::new(f64::INFINITY, 0.0, 0.0));
    assert!(matches!(result, Err(GeometryError::NonFinite(_))));
}

/// Test the direction is normalized on construction.
#[test]
fn test_axis_normalizes_direction() {
    let axis = RotationAxis::through_origin(Point3D::new(0.0, 0.0, 5.0)).expect("valid axis");
    assert_point_eq(axis.direction(), Point3D::new(0.0, 0.0, 1.0));
    assert_point_eq(axis.point(), Point3D::zero());
}

/// Test right-handed rotation about z.
///
/// Verifies a quarter turn maps +x to +y and a half turn maps +x to -x.
#[test]
fn test_axis_rotate_point() {
    let axis = RotationAxis::through_origin(Point3D::new(0.0, 0.0, 1.0)).expect("valid axis");
    let p = Point3D::new(1.0, 0.0, 2.0);

    assert_point_eq(axis.rotate_point(&p, FRAC_PI_2), Point3D::new(0.0, 1.0, 2.0));
    assert_point_eq(axis.rotate_point(&p, PI), Point3D::new(-1.0, 0.0, 2.0));
}

/// Test rotation about an axis off the origin.
///
/// Verifies:
/// - Points on the axis do not move
/// - Distances to the axis are preserved
#[test]
fn test_axis_rotate_offset() {
    let center = Point3D::new(1.0, 2.0, 3.0);
    let axis = RotationAxis::new(center, Point3D::new(0.0, 0.0, 1.0)).expect("valid axis");

    let on_axis = Point3D::new(1.0, 2.0, -7.0);
    assert_point_eq(axis.rotate_point(&on_axis, 1.234), on_axis);

    let p = Point3D::new(4.0, 2.0, 3.0);
    let rotated = axis.rotate_point(&p, FRAC_PI_2);
    assert_point_eq(rotated, Point3D::new(1.0, 5.0, 3.0));
}

/// Test rotating a set returns a new set and leaves the input unchanged.
#[test]
fn test_axis_rotate_set() {
    let axis = RotationAxis::through_origin(Point3D::new(1.0, 1.0, 1.0)).expect("valid axis");
    let set: CoordinateSet = vec![Point3D::new(1.0, 0.0, 0.0), Point3D::new(0.0, 1.0, 0.0)].into();
    let original = set.clone();

    // A third of a turn about (1, 1, 1) cycles the coordinate axes.
    let rotated = axis.rotate(&set, 2.0 * PI / 3.0);

    assert_eq!(set, original, "Input should not be mutated");
    assert_point_eq(rotated.points()[0], Point3D::new(0.0, 1.0, 0.0));
    assert_point_eq(rotated.points()[1], Point3D::new(0.0, 0.0, 1.0));
}

// ============================================================================
// Deviation Metric Tests
// ============================================================================

/// Test RMSD of translated sets.
#[test]
fn test_rmsd() {
    let a: CoordinateSet = vec![Point3D::zero(), Point3D::new(1.0, 0.0, 0.0)].into();
    let b: CoordinateSet = vec![Point3D::new(0.0, 2.0, 0.0), Point3D::new(1.0, 2.0, 0.0)].into();

    assert_relative_eq!(Rmsd.deviation(&a, &a).expect("valid"), 0.0);
    assert_relative_eq!(Rmsd.deviation(&a, &b).expect("valid"), 2.0);
}

/// Test nearest-neighbour distance ignores correspondence.
///
/// Verifies that a relabelled copy scores zero under the nearest-neighbour
/// metric but not under RMSD.
#[test]
fn test_nearest_neighbor_ignores_order() {
    let a: CoordinateSet = vec![Point3D::zero(), Point3D::new(3.0, 0.0, 0.0)].into();
    let b: CoordinateSet = vec![Point3D::new(3.0, 0.0, 0.0), Point3D::zero()].into();

    assert_relative_eq!(NearestNeighbor.deviation(&a, &b).expect("valid"), 0.0);
    assert_relative_eq!(Rmsd.deviation(&a, &b).expect("valid"), 3.0);
    assert_relative_eq!(Metric::default().deviation(&a, &b).expect("valid"), 0.0);
    assert_eq!(Metric::default(), Metric::NearestNeighbor);
}

/// Test metrics reject mismatched sets.
#[test]
fn test_metric_mismatch() {
    let a: CoordinateSet = vec![Point3D::zero()].into();
    let b: CoordinateSet = vec![Point3D::zero(), Point3D::zero()].into();

    for metric in [Metric::Rmsd, Metric::NearestNeighbor] {
        assert_eq!(
            metric.deviation(&a, &b),
            Err(GeometryError::MismatchedLengths { a_len: 1, b_len: 2 }),
            "{} should reject mismatched sets",
            metric.name()
        );
    }
}

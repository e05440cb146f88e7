//! Rotation about an arbitrary line in space.
//!
//! ## Key concepts
//!
//! * **Axis**: a point on the line plus a unit direction.
//! * **Rodrigues' formula**: for `v` relative to the axis point and unit
//!   direction `k`, `v' = v cos θ + (k × v) sin θ + k (k · v)(1 - cos θ)`.
//! * **Sign**: positive angles follow the right-hand rule about `k`.
//!
//! ## Invariants
//!
//! * The direction is always unit length; zero-length directions are
//!   rejected at construction.
//! * Rotation never mutates its input.

// Internal dependencies
use crate::geometry::point::{CoordinateSet, Point3D};
use crate::primitives::errors::GeometryError;

/// A line in 3D space about which coordinate sets are rotated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationAxis {
    point: Point3D,
    direction: Point3D,
}

impl RotationAxis {
    /// Axis through `point` along `direction` (normalized here).
    pub fn new(point: Point3D, direction: Point3D) -> Result<Self, GeometryError> {
        if !point.is_finite() || !direction.is_finite() {
            return Err(GeometryError::NonFinite(format!(
                "axis point ({}, {}, {}) direction ({}, {}, {})",
                point.x, point.y, point.z, direction.x, direction.y, direction.z
            )));
        }
        let direction = direction.normalize().ok_or(GeometryError::DegenerateAxis)?;
        Ok(Self { point, direction })
    }

    /// Axis through the origin along `direction`.
    pub fn through_origin(direction: Point3D) -> Result<Self, GeometryError> {
        Self::new(Point3D::zero(), direction)
    }

    /// A point on the axis.
    pub fn point(&self) -> Point3D {
        self.point
    }

    /// Unit direction of the axis.
    pub fn direction(&self) -> Point3D {
        self.direction
    }

    /// Rotate a single point by `angle` radians about the axis.
    #[inline]
    pub fn rotate_point(&self, p: &Point3D, angle: f64) -> Point3D {
        let (sin, cos) = angle.sin_cos();
        self.rotate_with(p, sin, cos)
    }

    /// Rotate every point of `coords` by `angle` radians, returning a new set.
    pub fn rotate(&self, coords: &CoordinateSet, angle: f64) -> CoordinateSet {
        let (sin, cos) = angle.sin_cos();
        coords.iter().map(|p| self.rotate_with(p, sin, cos)).collect()
    }

    #[inline]
    fn rotate_with(&self, p: &Point3D, sin: f64, cos: f64) -> Point3D {
        let k = &self.direction;
        let v = p.sub(&self.point);
        let rotated = v
            .scale(cos)
            .add(&k.cross(&v).scale(sin))
            .add(&k.scale(k.dot(&v) * (1.0 - cos)));
        rotated.add(&self.point)
    }
}

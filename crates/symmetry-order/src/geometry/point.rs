//! Points and coordinate sets in 3D Cartesian space.

// Internal dependencies
use crate::primitives::errors::GeometryError;

/// A point (or vector) in 3D Cartesian space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    /// Create a new point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(&self, other: &Point3D) -> f64 {
        self.sub(other).norm()
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared_to(&self, other: &Point3D) -> f64 {
        let d = self.sub(other);
        d.dot(&d)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Point3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[inline]
    pub fn cross(&self, other: &Point3D) -> Point3D {
        Point3D {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Vector magnitude.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector.
    pub fn normalize(&self) -> Option<Point3D> {
        let n = self.norm();
        if !n.is_finite() || n < f64::EPSILON {
            None
        } else {
            Some(self.scale(1.0 / n))
        }
    }

    /// Vector addition.
    #[inline]
    pub fn add(&self, other: &Point3D) -> Point3D {
        Point3D::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(&self, other: &Point3D) -> Point3D {
        Point3D::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Scalar multiplication.
    #[inline]
    pub fn scale(&self, s: f64) -> Point3D {
        Point3D::new(self.x * s, self.y * s, self.z * s)
    }

    /// Whether all three components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Ordered matched residue positions of one half of a structural alignment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinateSet {
    points: Vec<Point3D>,
}

impl CoordinateSet {
    /// Wrap a list of points.
    pub fn new(points: Vec<Point3D>) -> Self {
        Self { points }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in order.
    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    /// Iterate over the points in order.
    pub fn iter(&self) -> impl Iterator<Item = &Point3D> {
        self.points.iter()
    }

    /// Unweighted centroid, or the origin for an empty set.
    pub fn centroid(&self) -> Point3D {
        if self.points.is_empty() {
            return Point3D::zero();
        }
        let sum = self
            .points
            .iter()
            .fold(Point3D::zero(), |acc, p| acc.add(p));
        sum.scale(1.0 / self.points.len() as f64)
    }

    /// Check that the set is non-empty and every coordinate is finite.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.points.is_empty() {
            return Err(GeometryError::EmptyCoordinates);
        }
        if let Some((i, p)) = self.points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(GeometryError::NonFinite(format!(
                "point[{i}]=({}, {}, {})",
                p.x, p.y, p.z
            )));
        }
        Ok(())
    }

    /// Check that `other` can be compared index-wise with `self`.
    pub fn validate_pair(&self, other: &CoordinateSet) -> Result<(), GeometryError> {
        if self.len() != other.len() {
            return Err(GeometryError::MismatchedLengths {
                a_len: self.len(),
                b_len: other.len(),
            });
        }
        self.validate()?;
        other.validate()
    }
}

impl From<Vec<Point3D>> for CoordinateSet {
    fn from(points: Vec<Point3D>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point3D> for CoordinateSet {
    fn from_iter<I: IntoIterator<Item = Point3D>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

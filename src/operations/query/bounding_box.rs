use crate::error::{GeometryError, Result};
use crate::geometry::Curve;
use crate::math::{Point2, Vector2};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    /// Returns `max - min`.
    #[must_use]
    pub fn extent(&self) -> Vector2 {
        self.max - self.min
    }

    /// Returns the midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Computes the axis-aligned bounding box of a curve.
pub struct BoundingBox<'a> {
    curve: &'a Curve,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(curve: &'a Curve) -> Self {
        Self { curve }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyCurve` if the curve has no points.
    pub fn execute(&self) -> Result<Aabb> {
        let mut iter = self.curve.points().iter();
        let first = iter.next().ok_or(GeometryError::EmptyCurve)?;
        let init = Aabb {
            min: *first,
            max: *first,
        };
        Ok(iter.fold(init, |acc, p| Aabb {
            min: Point2::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
            max: Point2::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use crate::operations::fractal::{BuildSnowflake, Depth};

    #[test]
    fn triangle_bounds() {
        let curve = BuildSnowflake::new(Depth::default()).execute();
        let bb = BoundingBox::new(&curve).execute().unwrap();
        assert!(bb.min.x.abs() < TOLERANCE);
        assert!(bb.min.y.abs() < TOLERANCE);
        assert!((bb.max.x - 1.0).abs() < TOLERANCE);
        assert!((bb.max.y - 3.0_f64.sqrt() / 2.0).abs() < TOLERANCE);
        assert!((bb.center().x - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn inward_bumps_stay_inside_triangle() {
        let base = BuildSnowflake::new(Depth::default()).execute();
        let curve = BuildSnowflake::new(Depth::new(3).unwrap()).execute();
        let outer = BoundingBox::new(&base).execute().unwrap();
        let inner = BoundingBox::new(&curve).execute().unwrap();
        assert!(inner.min.x >= outer.min.x - TOLERANCE);
        assert!(inner.min.y >= outer.min.y - TOLERANCE);
        assert!(inner.max.x <= outer.max.x + TOLERANCE);
        assert!(inner.max.y <= outer.max.y + TOLERANCE);
    }

    #[test]
    fn empty_curve_is_an_error() {
        let curve = Curve::open(Vec::new());
        assert!(BoundingBox::new(&curve).execute().is_err());
    }
}

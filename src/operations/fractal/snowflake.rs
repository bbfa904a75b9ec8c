use tracing::debug;

use crate::error::Result;
use crate::geometry::{Curve, Segment};
use crate::math::Point2;

use super::{Depth, KochSubdivide};

/// `√3 / 2`, the height of the unit equilateral triangle.
const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Vertices of the base triangle, in traversal order.
pub const SNOWFLAKE_VERTICES: [Point2; 3] = [
    Point2::new(0.0, 0.0),
    Point2::new(1.0, 0.0),
    Point2::new(0.5, HALF_SQRT_3),
];

/// Builds the Koch snowflake boundary on the unit equilateral triangle.
///
/// The edges are subdivided in the order `v0 → v1`, `v1 → v2`, `v2 → v0`.
/// The resulting closed [`Curve`] stores `3 * 4^depth` points; its implicit
/// closing edge ends at the first vertex.
#[derive(Debug, Clone, Copy)]
pub struct BuildSnowflake {
    depth: Depth,
}

impl BuildSnowflake {
    /// Creates a new `BuildSnowflake` operation.
    #[must_use]
    pub fn new(depth: Depth) -> Self {
        Self { depth }
    }

    /// Executes the construction.
    #[must_use]
    pub fn execute(&self) -> Curve {
        let mut points = Vec::with_capacity(self.depth.snowflake_point_count());
        for i in 0..SNOWFLAKE_VERTICES.len() {
            let edge = Segment::new(
                SNOWFLAKE_VERTICES[i],
                SNOWFLAKE_VERTICES[(i + 1) % SNOWFLAKE_VERTICES.len()],
            );
            KochSubdivide::new(edge, self.depth).extend_open(&mut points);
        }
        debug!(depth = %self.depth, points = points.len(), "built snowflake");
        Curve::closed(points)
    }
}

/// Returns the snowflake boundary points for `depth`.
///
/// # Errors
///
/// Returns an error if `depth` is negative or exceeds [`super::MAX_DEPTH`].
pub fn build_snowflake(depth: i32) -> Result<Vec<Point2>> {
    let depth = Depth::try_from(depth)?;
    Ok(BuildSnowflake::new(depth).execute().into_points())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn half_sqrt_3_constant() {
        assert_abs_diff_eq!(HALF_SQRT_3, 3.0_f64.sqrt() / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn depth_zero_is_the_triangle() {
        assert_eq!(build_snowflake(0).unwrap(), SNOWFLAKE_VERTICES.to_vec());
    }

    #[test]
    fn point_count_is_three_times_four_pow_depth() {
        for depth in 0..=6_i32 {
            let pts = build_snowflake(depth).unwrap();
            assert_eq!(pts.len(), 3 * 4_usize.pow(depth.unsigned_abs()), "depth={depth}");
        }
    }

    #[test]
    fn edge_order_follows_triangle() {
        let depth = Depth::new(2).unwrap();
        let pts = BuildSnowflake::new(depth).execute().into_points();
        let per_edge = depth.segment_point_count() - 1;
        assert_eq!(pts[0], SNOWFLAKE_VERTICES[0]);
        assert_eq!(pts[per_edge], SNOWFLAKE_VERTICES[1]);
        assert_eq!(pts[2 * per_edge], SNOWFLAKE_VERTICES[2]);
    }

    #[test]
    fn result_is_closed_without_repeats() {
        let curve = BuildSnowflake::new(Depth::new(4).unwrap()).execute();
        assert!(curve.is_closed());
        assert!(!curve.has_repeated_vertices());
        let ring = curve.closed_ring();
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn perimeter_grows_by_four_thirds() {
        for depth in 0..=5 {
            let curve = BuildSnowflake::new(Depth::new(depth).unwrap()).execute();
            #[allow(clippy::cast_possible_truncation)]
            let expected = 3.0 * (4.0_f64 / 3.0).powi(depth as i32);
            assert_abs_diff_eq!(curve.length(), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn winding_is_counter_clockwise() {
        let curve = BuildSnowflake::new(Depth::new(3).unwrap()).execute();
        assert!(curve.signed_area() > TOLERANCE);
    }

    #[test]
    fn deterministic() {
        assert_eq!(build_snowflake(4).unwrap(), build_snowflake(4).unwrap());
    }

    #[test]
    fn invalid_depths_are_rejected() {
        assert!(build_snowflake(-3).is_err());
        assert!(build_snowflake(13).is_err());
    }
}

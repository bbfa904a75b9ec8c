use crate::math::polygon_2d::{polyline_length_2d, signed_area_2d};
use crate::math::{Point2, TOLERANCE};

/// An ordered polyline of straight edges.
///
/// For closed curves each vertex is stored once and the last vertex
/// connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<Point2>,
    closed: bool,
}

impl Curve {
    /// Creates an open polyline.
    #[must_use]
    pub fn open(points: Vec<Point2>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Creates a closed polyline. A trailing point equal to the first is
    /// dropped, since the closing edge is implicit.
    #[must_use]
    pub fn closed(mut points: Vec<Point2>) -> Self {
        let repeats_first = match (points.first(), points.last()) {
            (Some(first), Some(last)) => points.len() > 1 && (first - last).norm() < TOLERANCE,
            _ => false,
        };
        if repeats_first {
            points.pop();
        }
        Self {
            points,
            closed: true,
        }
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Consumes the curve, returning its vertices.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    /// Returns `true` if the last vertex connects back to the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the number of stored vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the curve has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of edges, counting the closing edge of a closed curve.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Returns the vertices with the first one repeated at the end when the
    /// curve is closed, ready to be drawn as a single polyline.
    #[must_use]
    pub fn closed_ring(&self) -> Vec<Point2> {
        let mut ring = self.points.clone();
        if self.closed {
            if let Some(&first) = self.points.first() {
                ring.push(first);
            }
        }
        ring
    }

    /// Returns the total edge length.
    #[must_use]
    pub fn length(&self) -> f64 {
        polyline_length_2d(&self.points, self.closed)
    }

    /// Returns the shoelace area; positive when wound counter-clockwise.
    /// Open curves are treated as if closed.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Returns `true` if two consecutive vertices (including across the
    /// closing edge) coincide within [`TOLERANCE`].
    #[must_use]
    pub fn has_repeated_vertices(&self) -> bool {
        let n = self.points.len();
        (0..self.segment_count()).any(|i| {
            let j = (i + 1) % n;
            (self.points[j] - self.points[i]).norm() < TOLERANCE
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn closed_drops_explicit_closing_point() {
        let mut pts = triangle();
        pts.push(Point2::new(0.0, 0.0));
        let curve = Curve::closed(pts);
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.segment_count(), 3);
    }

    #[test]
    fn closed_ring_repeats_first_point() {
        let ring = Curve::closed(triangle()).closed_ring();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0], ring[3]);

        let open = Curve::open(triangle()).closed_ring();
        assert_eq!(open.len(), 3);
    }

    #[test]
    fn segment_count_open_vs_closed() {
        assert_eq!(Curve::open(triangle()).segment_count(), 2);
        assert_eq!(Curve::closed(triangle()).segment_count(), 3);
        assert_eq!(Curve::open(vec![Point2::new(0.0, 0.0)]).segment_count(), 0);
    }

    #[test]
    fn length_and_area() {
        let curve = Curve::closed(triangle());
        let expected = 2.0 + 2.0_f64.sqrt();
        assert!((curve.length() - expected).abs() < TOLERANCE);
        assert!((curve.signed_area() - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn detects_repeated_vertices() {
        assert!(!Curve::closed(triangle()).has_repeated_vertices());
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
        ];
        assert!(Curve::open(pts).has_repeated_vertices());
    }
}

use std::f64::consts::FRAC_PI_3;

use crate::math::{rotate_2d, Point2, Vector2};

/// A directed straight segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Returns the vector from `start` to `end`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Evaluates `start + t * (end - start)`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + self.vector() * t
    }

    /// Returns the points at one third and two thirds of the way along.
    #[must_use]
    pub fn trisect(&self) -> (Point2, Point2) {
        let v = self.vector();
        (self.start + v / 3.0, self.start + v * 2.0 / 3.0)
    }

    /// Returns the apex of the equilateral bump raised on the middle third.
    ///
    /// The middle third is rotated by +60° about its first point, so the bump
    /// lies to the left of the direction of travel.
    #[must_use]
    pub fn koch_apex(&self) -> Point2 {
        let (a, b) = self.trisect();
        a + rotate_2d(&(b - a), FRAC_PI_3)
    }

    /// Splits the segment into the four Koch sub-segments:
    /// `(start, a)`, `(a, apex)`, `(apex, b)`, `(b, end)`.
    #[must_use]
    pub fn koch_split(&self) -> [Segment; 4] {
        let (a, b) = self.trisect();
        let apex = self.koch_apex();
        [
            Segment::new(self.start, a),
            Segment::new(a, apex),
            Segment::new(apex, b),
            Segment::new(b, self.end),
        ]
    }
}

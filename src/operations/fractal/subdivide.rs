use tracing::debug;

use crate::error::Result;
use crate::geometry::Segment;
use crate::math::Point2;

use super::Depth;

/// Applies Koch subdivision to a single segment.
///
/// The result runs from the segment's start to its end and holds exactly
/// `4^depth + 1` points. Shared endpoints between neighbouring sub-segments
/// appear once.
#[derive(Debug, Clone, Copy)]
pub struct KochSubdivide {
    segment: Segment,
    depth: Depth,
}

impl KochSubdivide {
    /// Creates a new `KochSubdivide` operation.
    #[must_use]
    pub fn new(segment: Segment, depth: Depth) -> Self {
        Self { segment, depth }
    }

    /// Executes the subdivision, returning the ordered points.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let mut points = Vec::with_capacity(self.depth.segment_point_count());
        self.extend_open(&mut points);
        points.push(self.segment.end());
        points
    }

    /// Appends every point of the subdivided segment except its end point.
    ///
    /// Chaining calls over consecutive segments yields their concatenation
    /// with shared endpoints de-duplicated.
    pub(crate) fn extend_open(&self, out: &mut Vec<Point2>) {
        push_koch(out, self.segment, self.depth);
    }
}

fn push_koch(out: &mut Vec<Point2>, segment: Segment, depth: Depth) {
    match depth.shallower() {
        None => out.push(segment.start()),
        Some(next) => {
            for piece in segment.koch_split() {
                push_koch(out, piece, next);
            }
        }
    }
}

/// Subdivides the segment `p1 → p2` to the given depth.
///
/// # Errors
///
/// Returns an error if `depth` is negative or exceeds [`super::MAX_DEPTH`].
pub fn subdivide(p1: Point2, p2: Point2, depth: i32) -> Result<Vec<Point2>> {
    let depth = Depth::try_from(depth)?;
    let points = KochSubdivide::new(Segment::new(p1, p2), depth).execute();
    debug!(%depth, points = points.len(), "subdivided segment");
    Ok(points)
}

use crate::error::{Result, TessellationError};
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::Point2;

use super::{StrokeMesh, StrokeStyle};

/// Generates one filled quad per polyline segment.
///
/// Joins are left open; the rasterizer caps them.
#[derive(Debug)]
pub struct TessellateStroke<'a> {
    points: &'a [Point2],
    style: StrokeStyle,
    closed: bool,
}

impl<'a> TessellateStroke<'a> {
    /// Creates a new stroke tessellation operation.
    #[must_use]
    pub fn new(points: &'a [Point2], style: StrokeStyle, closed: bool) -> Self {
        Self {
            points,
            style,
            closed,
        }
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are provided, or if consecutive
    /// points are coincident (zero-length segment).
    pub fn execute(&self) -> Result<StrokeMesh> {
        let n = self.points.len();
        if n < 2 {
            return Err(TessellationError::InvalidParameters(
                "at least 2 points are required for stroke tessellation".to_owned(),
            )
            .into());
        }

        let half_w = self.style.half_width();
        let segment_count = if self.closed && n > 2 { n } else { n - 1 };
        let mut quads = Vec::with_capacity(segment_count);

        for i in 0..segment_count {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            let off = left_normal(segment_direction(&a, &b)?) * half_w;
            quads.push([a + off, b + off, b - off, a - off]);
        }

        Ok(StrokeMesh { quads })
    }
}

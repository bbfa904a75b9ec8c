mod stroke_style;
mod tessellate_stroke;

pub use stroke_style::StrokeStyle;
pub use tessellate_stroke::TessellateStroke;

use crate::math::Point2;

/// Filled quads approximating a stroked polyline.
///
/// Each quad is wound left-start, left-end, right-end, right-start.
#[derive(Debug, Clone, Default)]
pub struct StrokeMesh {
    /// One quad per polyline segment.
    pub quads: Vec<[Point2; 4]>,
}

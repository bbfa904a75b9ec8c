use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};
use crate::operations::query::Aabb;

use super::RenderOptions;

/// Maps model coordinates to pixel coordinates.
///
/// Both axes share one scale, the model is centred in the image, and the
/// y axis is flipped so model "up" is image "up".
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    scale: f64,
    model_center: Point2,
    image_center: Point2,
}

impl Viewport {
    /// Fits `bounds` into the drawable area of the image described by `options`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the bounds collapse to a point.
    pub fn fit(bounds: &Aabb, options: &RenderOptions) -> Result<Self> {
        let extent = bounds.extent();
        let pad = 2.0 * f64::from(options.padding);
        let avail_w = f64::from(options.width) - pad;
        let avail_h = f64::from(options.height) - pad;

        let sx = (extent.x > TOLERANCE).then(|| avail_w / extent.x);
        let sy = (extent.y > TOLERANCE).then(|| avail_h / extent.y);
        let scale = match (sx, sy) {
            (Some(sx), Some(sy)) => sx.min(sy),
            (Some(s), None) | (None, Some(s)) => s,
            (None, None) => {
                return Err(GeometryError::Degenerate(
                    "cannot fit a curve with zero extent".to_owned(),
                )
                .into())
            }
        };

        Ok(Self {
            scale,
            model_center: bounds.center(),
            image_center: Point2::new(
                f64::from(options.width) * 0.5,
                f64::from(options.height) * 0.5,
            ),
        })
    }

    /// Returns the number of pixels per model unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Converts a model point to pixel coordinates.
    #[must_use]
    pub fn to_pixel(&self, p: &Point2) -> Point2 {
        let d = (p - self.model_center) * self.scale;
        Point2::new(self.image_center.x + d.x, self.image_center.y - d.y)
    }
}

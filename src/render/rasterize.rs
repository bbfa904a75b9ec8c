use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::Curve;
use crate::math::Point2;
use crate::operations::query::BoundingBox;
use crate::tessellation::{StrokeStyle, TessellateStroke};

use super::{RenderOptions, Viewport};

/// Widths at or below this are drawn as single-pixel lines.
const HAIRLINE_WIDTH: f64 = 1.0;

/// Draws curves onto RGB images.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rasterizer {
    options: RenderOptions,
}

impl Rasterizer {
    /// Creates a rasterizer with the given options.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Returns the options this rasterizer draws with.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders `curve` scaled to fit the canvas. Closed curves include their
    /// closing edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the curve has fewer
    /// than two distinct points.
    pub fn render(&self, curve: &Curve) -> Result<RgbImage> {
        self.options.validate()?;
        if curve.segment_count() == 0 {
            return Err(GeometryError::Degenerate(
                "a curve needs at least two points to be drawn".to_owned(),
            )
            .into());
        }

        let bounds = BoundingBox::new(curve).execute()?;
        let viewport = Viewport::fit(&bounds, &self.options)?;
        let pixels: Vec<Point2> = curve
            .points()
            .iter()
            .map(|p| viewport.to_pixel(p))
            .collect();

        let mut canvas =
            RgbImage::from_pixel(self.options.width, self.options.height, self.options.background);
        let color = self.options.line_color;

        if self.options.line_width <= HAIRLINE_WIDTH {
            draw_hairline(&mut canvas, &pixels, curve.is_closed(), color);
        } else {
            let style = StrokeStyle::new(self.options.line_width)?;
            let mesh = TessellateStroke::new(&pixels, style, curve.is_closed()).execute()?;
            for quad in &mesh.quads {
                fill_quad(&mut canvas, quad, color);
            }
            #[allow(clippy::cast_possible_truncation)]
            let radius = style.half_width().floor() as i32;
            if radius > 0 {
                for p in &pixels {
                    draw_filled_circle_mut(&mut canvas, to_i32(p), radius, color);
                }
            }
        }

        debug!(
            width = self.options.width,
            height = self.options.height,
            points = pixels.len(),
            "rasterized curve"
        );
        Ok(canvas)
    }
}

fn draw_hairline(canvas: &mut RgbImage, pixels: &[Point2], closed: bool, color: Rgb<u8>) {
    let n = pixels.len();
    let segments = if closed && n > 2 { n } else { n - 1 };
    for i in 0..segments {
        let a = pixels[i];
        let b = pixels[(i + 1) % n];
        draw_line_segment_mut(canvas, to_f32(&a), to_f32(&b), color);
    }
}

fn fill_quad(canvas: &mut RgbImage, quad: &[Point2; 4], color: Rgb<u8>) {
    let mut poly: Vec<Point<i32>> = Vec::with_capacity(4);
    for p in quad {
        let (x, y) = to_i32(p);
        let next = Point::new(x, y);
        if poly.last() != Some(&next) {
            poly.push(next);
        }
    }
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    if poly.len() >= 3 {
        draw_polygon_mut(canvas, &poly, color);
    } else {
        draw_line_segment_mut(canvas, to_f32(&quad[0]), to_f32(&quad[1]), color);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_f32(p: &Point2) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

#[allow(clippy::cast_possible_truncation)]
fn to_i32(p: &Point2) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

//! Rasterization of curves to image files.

mod output;
mod rasterize;
mod viewport;

pub use output::{default_output_path, save_image};
pub use rasterize::Rasterizer;
pub use viewport::Viewport;

use image::Rgb;

use crate::error::{RenderError, Result};

/// Line colour used when none is given (`#1f77b4`).
pub const DEFAULT_LINE_COLOR: Rgb<u8> = Rgb([0x1f, 0x77, 0xb4]);

/// Parameters controlling how a curve is drawn.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Empty border kept around the curve, in pixels.
    pub padding: u32,
    /// Stroke width in pixels.
    pub line_width: f64,
    /// Stroke colour.
    pub line_color: Rgb<u8>,
    /// Fill colour of the whole canvas.
    pub background: Rgb<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            padding: 10,
            line_width: 1.0,
            line_color: DEFAULT_LINE_COLOR,
            background: Rgb([0xff, 0xff, 0xff]),
        }
    }
}

impl RenderOptions {
    /// Returns a copy with a square canvas of `size` pixels.
    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.width = size;
        self.height = size;
        self
    }

    /// Returns a copy with the given stroke width.
    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    /// Checks that the options describe a drawable canvas.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidOptions` if a dimension is zero, the
    /// padding leaves no room to draw, or the line width is not positive.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(invalid(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.padding.saturating_mul(2) >= self.width.min(self.height) {
            return Err(invalid(format!(
                "padding {} leaves no room in a {}x{} image",
                self.padding, self.width, self.height
            )));
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(invalid(format!(
                "line width must be positive, got {}",
                self.line_width
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> crate::error::KochError {
    RenderError::InvalidOptions(msg).into()
}

use crate::error::{Result, TessellationError};

/// Style parameters for polyline stroke tessellation.
#[derive(Debug, Clone, Copy)]
pub struct StrokeStyle {
    width: f64,
}

impl StrokeStyle {
    /// Creates a new stroke style.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not a positive finite number.
    pub fn new(width: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(TessellationError::InvalidParameters(format!(
                "stroke width must be positive, got {width}"
            ))
            .into());
        }
        Ok(Self { width })
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns half the stroke width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }
}

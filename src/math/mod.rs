pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rotation type.
pub type Rotation2 = nalgebra::Rotation2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Rotates `v` counter-clockwise by `angle` radians.
#[must_use]
pub fn rotate_2d(v: &Vector2, angle: f64) -> Vector2 {
    Rotation2::new(angle) * v
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn quarter_turn_maps_x_to_y() {
        let r = rotate_2d(&Vector2::new(1.0, 0.0), FRAC_PI_2);
        assert_abs_diff_eq!(r.x, 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(r.y, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn sixty_degrees_preserves_length() {
        let v = Vector2::new(3.0, -4.0);
        let r = rotate_2d(&v, FRAC_PI_3);
        assert_abs_diff_eq!(r.norm(), 5.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(v.angle(&r), FRAC_PI_3, epsilon = 1e-9);
    }
}

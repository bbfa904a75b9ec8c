mod bounding_box;
mod length;

pub use bounding_box::{Aabb, BoundingBox};
pub use length::Perimeter;

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;
pub mod tessellation;

pub use error::{KochError, Result};
pub use operations::fractal::{build_snowflake, subdivide, BuildSnowflake, Depth, KochSubdivide};

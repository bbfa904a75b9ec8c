pub mod fractal;
pub mod query;

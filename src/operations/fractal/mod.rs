//! Koch curve construction.

mod depth;
mod snowflake;
mod subdivide;

pub use depth::{Depth, MAX_DEPTH};
pub use snowflake::{build_snowflake, BuildSnowflake, SNOWFLAKE_VERTICES};
pub use subdivide::{subdivide, KochSubdivide};

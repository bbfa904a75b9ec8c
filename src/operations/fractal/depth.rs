use std::fmt;

use crate::error::{OperationError, Result};

/// Largest accepted recursion depth. A snowflake at this depth already has
/// `3 * 4^12` (about fifty million) vertices.
pub const MAX_DEPTH: u32 = 12;

/// A validated Koch recursion depth in `0..=MAX_DEPTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Depth(u32);

impl Depth {
    /// Creates a depth from a signed level.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for a negative level and
    /// `OperationError::DepthTooLarge` for a level above [`MAX_DEPTH`].
    pub fn new(level: i64) -> Result<Self> {
        if level < 0 {
            return Err(OperationError::InvalidInput(format!(
                "recursion depth must be non-negative, got {level}"
            ))
            .into());
        }
        match u32::try_from(level) {
            Ok(d) if d <= MAX_DEPTH => Ok(Self(d)),
            _ => Err(OperationError::DepthTooLarge {
                depth: level,
                max: MAX_DEPTH,
            }
            .into()),
        }
    }

    /// Returns the depth as an unsigned level.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns the depth one level shallower, or `None` at the base case.
    #[must_use]
    pub fn shallower(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }

    /// Number of points produced by subdividing one segment: `4^depth + 1`.
    #[must_use]
    pub fn segment_point_count(self) -> usize {
        4_usize.pow(self.0) + 1
    }

    /// Number of points on the snowflake boundary: `3 * 4^depth`.
    #[must_use]
    pub fn snowflake_point_count(self) -> usize {
        3 * 4_usize.pow(self.0)
    }
}

impl TryFrom<i64> for Depth {
    type Error = crate::error::KochError;

    fn try_from(level: i64) -> Result<Self> {
        Self::new(level)
    }
}

impl TryFrom<i32> for Depth {
    type Error = crate::error::KochError;

    fn try_from(level: i32) -> Result<Self> {
        Self::new(i64::from(level))
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

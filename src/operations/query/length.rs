use crate::geometry::Curve;

/// Computes the total edge length of a curve.
///
/// Closed curves include the edge from the last point back to the first.
pub struct Perimeter<'a> {
    curve: &'a Curve,
}

impl<'a> Perimeter<'a> {
    /// Creates a new `Perimeter` query.
    #[must_use]
    pub fn new(curve: &'a Curve) -> Self {
        Self { curve }
    }

    /// Executes the query, returning the length.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.curve.length()
    }
}

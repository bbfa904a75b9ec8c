use thiserror::Error;

/// Top-level error type for kochflake.
#[derive(Debug, Error)]
pub enum KochError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("curve has no points")]
    EmptyCurve,
}

/// Errors related to curve construction.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("recursion depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: i64, max: u32 },
}

/// Errors related to stroke tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Errors related to rasterizing and saving images.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render options: {0}")]
    InvalidOptions(String),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Convenience type alias for results using [`KochError`].
pub type Result<T> = std::result::Result<T, KochError>;

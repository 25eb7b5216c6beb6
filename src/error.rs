use thiserror::Error;

/// Top-level error type for the warpkit engine.
#[derive(Debug, Error)]
pub enum WarpError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}

/// Errors related to the shape tree and its accessors.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("index {index} is out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid path definition: {0}")]
    InvalidPathDef(String),
}

/// Errors related to envelope construction and evaluation.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("degenerate reference bounds: width = {width}, height = {height}")]
    InvalidBounds { width: f32, height: f32 },

    #[error("control point index {index} is out of range for {len} control points")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience type alias for results using [`WarpError`].
pub type Result<T> = std::result::Result<T, WarpError>;

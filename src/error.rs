use thiserror::Error;

/// Top-level error type for the polyedge crate.
#[derive(Debug, Error)]
pub enum PolyedgeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while constructing geometric values from raw input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid viewport: {reason}")]
    InvalidViewport { reason: String },

    #[error("invalid rectangle: {reason}")]
    InvalidRectangle { reason: String },

    #[error("{coordinate} = {value} is out of range [{min}, {max}]")]
    CoordinateOutOfRange {
        coordinate: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("non-finite value for {0}")]
    NonFinite(&'static str),
}

/// Convenience type alias for results using [`PolyedgeError`].
pub type Result<T> = std::result::Result<T, PolyedgeError>;

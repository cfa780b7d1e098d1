use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Construction input that cannot describe a point, e.g. a negative dimensionality.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Two points handed to a metric do not share a dimensionality.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Number of properties of the first point
        expected: usize,
        /// Number of properties of the second point
        actual: usize,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Top-level error type for shape construction and intersection.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised by geometric input that cannot describe a shape.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("division by zero while computing {0}")]
    DivisionByZero(&'static str),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised by an operation configured with unusable parameters.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`DraftError`].
pub type Result<T> = std::result::Result<T, DraftError>;

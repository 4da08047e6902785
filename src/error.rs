use thiserror::Error;

/// Top-level error type for the Linework construction kernel.
#[derive(Debug, Error)]
pub enum LineworkError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to path construction and geometric derivation.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Input from which no primitive can be derived: coincident points,
    /// collinear three-point circle input, a radius that cannot span its
    /// endpoints, a non-positive radius.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// Input whose shape matches no construction variant, such as a point
    /// sequence of unsupported arity.
    #[error("invalid construction arguments: {0}")]
    InvalidArguments(String),
}

/// Errors related to path operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`LineworkError`].
pub type Result<T> = std::result::Result<T, LineworkError>;

//! Error types for beam analysis

use thiserror::Error;

/// Main error type for beam analysis operations
#[derive(Error, Debug)]
pub enum BeamError {
    #[error("Singular stiffness matrix - beam may be unstable or have insufficient supports")]
    SingularMatrix,

    #[error("Model is unstable: {0}")]
    Unstable(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for beam analysis operations
pub type BeamResult<T> = Result<T, BeamError>;

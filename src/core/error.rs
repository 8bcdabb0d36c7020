//! Gate error types

use thiserror::Error;

/// Errors that can occur while evaluating a tool invocation
#[derive(Error, Debug)]
pub enum GateError {
    /// Input payload could not be parsed
    #[error("Invalid tool payload: {0}")]
    InvalidPayload(String),

    /// Home directory could not be resolved
    #[error("Home directory not found")]
    HomeDirNotFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for gate operations
pub type GateResult<T> = Result<T, GateError>;

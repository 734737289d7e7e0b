//! Structured error types for the KAT engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("field operation failed: {0}")]
    Field(#[from] gf359_algorithms::Error),

    #[error("api error: {0}")]
    Api(#[from] gf359_api::Error),

    #[error("failed to read vector file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse vector file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("mismatch - expected: {expected}, got: {actual}")]
    Mismatch { expected: String, actual: String },

    #[error("no solution: {0}")]
    NoSolution(&'static str),

    #[error("unsupported: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

//! Error types for UMH

use thiserror::Error;

/// Core error type for UMH operations
#[derive(Error, Debug)]
pub enum UmhError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Record variant mismatch: {0}")]
    VariantMismatch(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for UMH operations
pub type Result<T> = std::result::Result<T, UmhError>;

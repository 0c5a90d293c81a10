//! Error types for chat providers

use thiserror::Error;

/// Error type for chat operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),
}

/// Result type for chat operations.
pub type ChatResult<T> = Result<T, ChatError>;

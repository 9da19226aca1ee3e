use thiserror::Error;

/// Errors that can occur while encoding or decoding cached values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Deserialization error for {key}: {message}")]
    Deserialization { key: String, message: String },
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

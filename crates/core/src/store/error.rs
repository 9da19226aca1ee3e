use thiserror::Error;

/// Errors that can occur in the persisted local store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid store key: {0}")]
    InvalidKey(String),
    #[error("Store I/O failed: {0}")]
    Io(String),
}

/// Result type for local store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

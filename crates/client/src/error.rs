//! Client error types.

use std::sync::Arc;

use hostly_core::cache::CacheError;
use hostly_core::models::{OrderError, ValidationError};
use hostly_core::store::StoreError;
use hostly_core::tenant::TenantError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Tenant(#[from] TenantError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A failure delivered to every reader that joined the same fetch.
    #[error(transparent)]
    Shared(Arc<ClientError>),
}

impl ClientError {
    /// Returns the HTTP status behind this error, if there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::NotFound { .. } => Some(404),
            ClientError::Unauthorized(_) => Some(401),
            ClientError::Request(err) => err.status().map(|s| s.as_u16()),
            ClientError::Shared(inner) => inner.status(),
            _ => None,
        }
    }

    /// Unwraps a shared error when this is the last reference to it.
    pub(crate) fn from_shared(err: Arc<ClientError>) -> Self {
        Arc::try_unwrap(err).unwrap_or_else(ClientError::Shared)
    }
}

use async_trait::async_trait;

use super::{Result, StoreError};

/// Persisted client-side key/value state that outlives the query cache,
/// such as the selected restaurant (`location-storage`).
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Gets the raw value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Checks that a store key is a plain name usable as a file stem.
///
/// Keys are limited to ASCII alphanumerics, `-`, `_` and `.`, and may not
/// start with `.`.
pub fn validate_store_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

//! Pure functions for encoding cached values.
//!
//! The cache stores every value as JSON bytes so entries of different types
//! can share one map, and so a snapshot of the cache can be compared
//! byte-for-byte.

use serde::{de::DeserializeOwned, Serialize};

use super::{CacheError, QueryKey, Result};

/// Encodes a value for storage in the cache.
pub fn encode_value<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| CacheError::Serialization(e.to_string()))
}

/// Decodes a cached value for `key`.
pub fn decode_value<T: DeserializeOwned>(key: &QueryKey, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| CacheError::Deserialization {
        key: key.to_string(),
        message: e.to_string(),
    })
}

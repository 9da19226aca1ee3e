//! [`LocalStore`] implementations and the persisted location state.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use hostly_core::store::{validate_store_key, LocalStore, Result, StoreError};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Selected restaurant, persisted under `location-storage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationState {
    pub restaurant_id: String,
}

/// In-memory store, used by tests and short-lived processes.
#[derive(Debug, Default)]
pub struct MemoryLocalStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryLocalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalStore for MemoryLocalStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        validate_store_key(key)?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_store_key(key)?;
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        validate_store_key(key)?;
        self.values.write().await.remove(key);
        Ok(())
    }
}

/// File-backed store keeping one `{key}.json` file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileLocalStore {
    dir: PathBuf,
}

impl FileLocalStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> Result<PathBuf> {
        validate_store_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

fn io_error(err: std::io::Error) -> StoreError {
    StoreError::Io(err.to_string())
}

#[async_trait]
impl LocalStore for FileLocalStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path(key)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(io_error)?;

        // Write then rename so readers never see a partial file.
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await.map_err(io_error)?;
        tokio::fs::rename(&tmp, &path).await.map_err(io_error)?;

        tracing::debug!(key, path = %path.display(), "Persisted local state");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(key, "Removed local state");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryLocalStore::new();
        assert_eq!(store.get("location-storage").await.unwrap(), None);

        store.set("location-storage", "{}").await.unwrap();
        assert_eq!(
            store.get("location-storage").await.unwrap().as_deref(),
            Some("{}")
        );

        store.remove("location-storage").await.unwrap();
        store.remove("location-storage").await.unwrap();
        assert_eq!(store.get("location-storage").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_rejects_bad_keys() {
        let store = MemoryLocalStore::new();
        let err = store.set("../escape", "x").await.unwrap_err();
        assert_eq!(err, StoreError::InvalidKey("../escape".to_string()));
    }

    #[tokio::test]
    async fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("state");

        FileLocalStore::new(&root)
            .set("location-storage", r#"{"restaurantId":"r1"}"#)
            .await
            .unwrap();
        assert!(root.join("location-storage.json").exists());

        let reopened = FileLocalStore::new(&root);
        assert_eq!(
            reopened.get("location-storage").await.unwrap().as_deref(),
            Some(r#"{"restaurantId":"r1"}"#)
        );
    }

    #[tokio::test]
    async fn test_file_store_remove_missing_is_ok() {
        let dir = TempDir::new().unwrap();
        let store = FileLocalStore::new(dir.path());

        store.remove("location-storage").await.unwrap();
        store.set("location-storage", "{}").await.unwrap();
        store.remove("location-storage").await.unwrap();

        assert_eq!(store.get("location-storage").await.unwrap(), None);
        assert!(!dir.path().join("location-storage.json").exists());
    }

    #[tokio::test]
    async fn test_file_store_rejects_path_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileLocalStore::new(dir.path());
        assert!(matches!(
            store.get("a/b").await,
            Err(StoreError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_location_state_wire_format() {
        let state = LocationState {
            restaurant_id: "r1".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"restaurantId":"r1"}"#
        );
    }
}

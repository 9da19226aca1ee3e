//! Runs mutations and applies their cache and local-state consequences.

use std::future::Future;
use std::sync::Arc;

use hostly_core::cache::{InvalidationSet, MutationKind, SideEffect};
use hostly_core::store::LocalStore;

use super::cache::QueryCache;
use crate::error::Result;

/// Executes writes against the backend.
///
/// After a successful write the invalidation set is applied to the cache,
/// then the side effects run in declaration order. A failed write returns
/// its error and leaves both the cache and the local store untouched. Once
/// the write has succeeded its value is always returned; a failing side
/// effect is logged.
#[derive(Clone)]
pub struct MutationExecutor {
    cache: QueryCache,
    local_store: Arc<dyn LocalStore>,
}

impl MutationExecutor {
    pub fn new(cache: QueryCache, local_store: Arc<dyn LocalStore>) -> Self {
        Self { cache, local_store }
    }

    /// Awaits `mutation` and, if it succeeds, invalidates what `kind` declares.
    pub async fn execute<T, Fut>(&self, kind: MutationKind, mutation: Fut) -> Result<T>
    where
        Fut: Future<Output = Result<T>>,
    {
        let name = kind.name();
        tracing::debug!(mutation = name, "Executing mutation");

        let value = match mutation.await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(mutation = name, error = %err, "Mutation failed");
                return Err(err);
            }
        };

        self.apply(&kind).await;
        tracing::info!(mutation = name, "Mutation succeeded");
        Ok(value)
    }

    async fn apply(&self, kind: &MutationKind) {
        match kind.invalidation_set() {
            InvalidationSet::All => self.cache.clear(),
            InvalidationSet::Prefixes(prefixes) => {
                for prefix in &prefixes {
                    self.cache.invalidate(prefix);
                }
            }
        }

        for effect in kind.side_effects() {
            match effect {
                SideEffect::RemoveLocalKey(key) => {
                    if let Err(err) = self.local_store.remove(key).await {
                        tracing::warn!(
                            mutation = kind.name(),
                            key,
                            error = %err,
                            "Failed to remove local key"
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::sync::local_store::MemoryLocalStore;
    use async_trait::async_trait;
    use hostly_core::cache::{pages_key, page_key, LOCATION_STORAGE_KEY};
    use hostly_core::query_key;
    use hostly_core::store::StoreError;

    /// Store whose writes always fail.
    struct BrokenStore;

    #[async_trait]
    impl LocalStore for BrokenStore {
        async fn get(&self, _key: &str) -> hostly_core::store::Result<Option<String>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> hostly_core::store::Result<()> {
            Err(StoreError::Io("disk".to_string()))
        }

        async fn remove(&self, _key: &str) -> hostly_core::store::Result<()> {
            Err(StoreError::Io("disk".to_string()))
        }
    }

    async fn seeded_cache(keys: &[hostly_core::cache::QueryKey]) -> QueryCache {
        let cache = QueryCache::default();
        for key in keys {
            let _: String = cache
                .get(key.clone(), || async { Ok("cached".to_string()) })
                .await
                .unwrap();
        }
        cache
    }

    async fn seeded_store() -> Arc<MemoryLocalStore> {
        let store = Arc::new(MemoryLocalStore::new());
        store
            .set(LOCATION_STORAGE_KEY, r#"{"restaurantId":"r1"}"#)
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_success_invalidates_declared_prefixes() {
        let cache = seeded_cache(&[pages_key("w1"), pages_key("w2"), page_key("p1")]).await;
        let executor = MutationExecutor::new(cache.clone(), seeded_store().await);

        let result = executor
            .execute(
                MutationKind::UpdatePage {
                    website_id: "w1".to_string(),
                    page_id: "p1".to_string(),
                },
                async { Ok(7) },
            )
            .await
            .unwrap();

        assert_eq!(result, 7);
        assert_eq!(cache.is_stale(&pages_key("w1")), Some(true));
        assert_eq!(cache.is_stale(&page_key("p1")), Some(true));
        assert_eq!(cache.is_stale(&pages_key("w2")), Some(false));
    }

    #[tokio::test]
    async fn test_failure_leaves_cache_and_store_untouched() {
        let cache = seeded_cache(&[query_key!["me"], query_key!["settings"]]).await;
        let store = seeded_store().await;
        let executor = MutationExecutor::new(cache.clone(), store.clone());
        let before = cache.snapshot();

        let err = executor
            .execute::<(), _>(MutationKind::DeleteMe, async {
                Err(ClientError::Api {
                    status: 500,
                    message: "nope".to_string(),
                })
            })
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(cache.snapshot(), before);
        assert!(store.get(LOCATION_STORAGE_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_me_clears_cache_then_removes_location() {
        let cache = seeded_cache(&[query_key!["me"], query_key!["restaurants", "me"]]).await;
        let store = seeded_store().await;
        let executor = MutationExecutor::new(cache.clone(), store.clone());

        executor
            .execute(MutationKind::DeleteMe, async { Ok(()) })
            .await
            .unwrap();

        assert!(cache.is_empty());
        assert_eq!(store.get(LOCATION_STORAGE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_mutation_without_side_effects_keeps_store() {
        let cache = seeded_cache(&[query_key!["settings"]]).await;
        let store = seeded_store().await;
        let executor = MutationExecutor::new(cache.clone(), store.clone());

        executor
            .execute(MutationKind::UpdateSettings, async { Ok(()) })
            .await
            .unwrap();

        assert_eq!(cache.is_stale(&query_key!["settings"]), Some(true));
        assert!(store.get(LOCATION_STORAGE_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_star_id_only_invalidates_its_own_key() {
        let cache = seeded_cache(&[pages_key("w1"), pages_key("w2")]).await;
        let executor = MutationExecutor::new(cache.clone(), seeded_store().await);

        executor
            .execute(
                MutationKind::CreatePage {
                    website_id: "*".to_string(),
                },
                async { Ok(()) },
            )
            .await
            .unwrap();

        assert_eq!(cache.is_stale(&pages_key("w1")), Some(false));
        assert_eq!(cache.is_stale(&pages_key("w2")), Some(false));
    }

    #[tokio::test]
    async fn test_side_effect_failure_keeps_mutation_result() {
        let cache = seeded_cache(&[query_key!["me"]]).await;
        let executor = MutationExecutor::new(cache.clone(), Arc::new(BrokenStore));

        let result = executor
            .execute(MutationKind::DeleteMe, async { Ok("deleted") })
            .await
            .unwrap();

        assert_eq!(result, "deleted");
        assert!(cache.is_empty());
    }
}

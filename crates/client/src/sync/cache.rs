//! Process-wide query cache with stale-while-revalidate reads.
//!
//! Values are stored as JSON bytes keyed by [`QueryKey`]. Reads follow the
//! plan computed by [`hostly_core::cache::plan_read`]:
//! - fresh entries are served without a fetch
//! - stale entries are served immediately while a refetch runs
//! - missing entries wait for a fetch
//!
//! At most one fetch per key is outstanding. Concurrent readers join the
//! in-flight fetch through a [`Shared`] future. Fetches are spawned on the
//! runtime, so a reader going away does not cancel the request.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use futures_util::future::{BoxFuture, FutureExt, Shared};
use hostly_core::cache::{
    classify, decode_value, encode_value, plan_read, prefix_matches, Freshness, QueryKey,
    QueryOptions, ReadPlan,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ClientError, Result};

type FetchOutcome = std::result::Result<Arc<Vec<u8>>, Arc<ClientError>>;
type SharedFetch = Shared<BoxFuture<'static, FetchOutcome>>;

/// A cached value and its staleness metadata.
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Arc<Vec<u8>>,
    fetched_at: Instant,
    invalidated: bool,
}

/// A fetch currently running for a key.
struct InFlight {
    id: u64,
    fetch: SharedFetch,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<QueryKey, CacheEntry>,
    in_flight: HashMap<QueryKey, InFlight>,
    /// Bumped by `clear()`; fetches from an older epoch are discarded.
    epoch: u64,
    next_fetch_id: u64,
}

impl CacheState {
    /// Stores a fetch result.
    ///
    /// A fetch detached by `invalidate` still delivers its value, but the
    /// entry stays stale and never replaces a value fetched after the
    /// invalidation.
    fn store(&mut self, key: QueryKey, data: Arc<Vec<u8>>, attached: bool) {
        let fetched_at = Instant::now();
        if attached {
            self.entries.insert(
                key,
                CacheEntry {
                    data,
                    fetched_at,
                    invalidated: false,
                },
            );
            return;
        }

        match self.entries.get_mut(&key) {
            Some(entry) if !entry.invalidated => {
                tracing::trace!(%key, "Dropping detached fetch result, newer value cached");
            }
            Some(entry) => {
                entry.data = data;
                entry.fetched_at = fetched_at;
            }
            None => {
                self.entries.insert(
                    key,
                    CacheEntry {
                        data,
                        fetched_at,
                        invalidated: true,
                    },
                );
            }
        }
    }
}

/// Point-in-time copy of one cache entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySnapshot {
    pub data: Vec<u8>,
    pub fetched_at: Instant,
    pub invalidated: bool,
}

/// Outcome of the synchronous part of a read.
enum Read {
    Cached(Arc<Vec<u8>>),
    Pending(SharedFetch),
}

/// Query cache shared by every reader in the process.
///
/// Cloning is cheap and yields a handle to the same cache.
#[derive(Clone)]
pub struct QueryCache {
    state: Arc<Mutex<CacheState>>,
    options: QueryOptions,
}

impl QueryCache {
    /// Creates an empty cache with the given default query options.
    pub fn new(options: QueryOptions) -> Self {
        Self {
            state: Arc::new(Mutex::new(CacheState::default())),
            options,
        }
    }

    /// Returns the default query options.
    pub fn options(&self) -> QueryOptions {
        self.options
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        lock_state(&self.state)
    }

    /// Reads `key` with the default options, fetching through `fetcher`
    /// when needed.
    pub async fn get<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        self.get_with(key, self.options, fetcher).await
    }

    /// Reads `key` with explicit options.
    ///
    /// `fetcher` is only called when a new fetch has to start; a reader that
    /// joins an in-flight fetch or is served from cache never calls it.
    pub async fn get_with<T, F, Fut>(
        &self,
        key: QueryKey,
        options: QueryOptions,
        fetcher: F,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let read = {
            let mut state = self.lock();
            let entry = state.entries.get(&key);
            let freshness = classify(
                entry.map(|e| e.fetched_at),
                options.stale_time,
                entry.is_some_and(|e| e.invalidated),
                Instant::now(),
            );
            let cached = entry.map(|e| Arc::clone(&e.data));

            match (plan_read(freshness, &options), cached) {
                (ReadPlan::ServeCached, Some(data)) => {
                    tracing::trace!(%key, "Query cache hit");
                    Read::Cached(data)
                }
                (ReadPlan::ServeStaleAndRefetch, Some(data)) => {
                    tracing::trace!(%key, "Serving stale query while revalidating");
                    // The refetch runs on its own task; readers get the stale value now.
                    let _ = self.start_fetch(&mut state, &key, fetcher);
                    Read::Cached(data)
                }
                _ => {
                    if freshness == Freshness::Missing {
                        tracing::trace!(%key, "Query cache miss");
                    }
                    Read::Pending(self.start_fetch(&mut state, &key, fetcher))
                }
            }
        };

        let bytes = match read {
            Read::Cached(bytes) => bytes,
            Read::Pending(fetch) => fetch.await.map_err(ClientError::from_shared)?,
        };
        Ok(decode_value(&key, &bytes)?)
    }

    /// Returns the in-flight fetch for `key`, starting one if there is none.
    fn start_fetch<T, F, Fut>(&self, state: &mut CacheState, key: &QueryKey, fetcher: F) -> SharedFetch
    where
        T: Serialize + Send + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        if let Some(in_flight) = state.in_flight.get(key) {
            tracing::trace!(%key, "Joining in-flight fetch");
            return in_flight.fetch.clone();
        }

        let id = state.next_fetch_id;
        state.next_fetch_id += 1;
        let epoch = state.epoch;

        let cache_state = Arc::clone(&self.state);
        let fetch_key = key.clone();
        let request = fetcher();

        tracing::debug!(%key, fetch_id = id, "Starting query fetch");

        let fetch = async move {
            let outcome =
                request
                    .await
                    .and_then(|value| encode_value(&value).map_err(ClientError::from));

            let mut state = lock_state(&cache_state);
            let attached = state
                .in_flight
                .get(&fetch_key)
                .is_some_and(|in_flight| in_flight.id == id);
            if attached {
                state.in_flight.remove(&fetch_key);
            }

            match outcome {
                Ok(bytes) => {
                    let bytes = Arc::new(bytes);
                    if state.epoch == epoch {
                        state.store(fetch_key, Arc::clone(&bytes), attached);
                    } else {
                        tracing::debug!(key = %fetch_key, "Discarding fetch started before cache clear");
                    }
                    Ok(bytes)
                }
                Err(err) => {
                    tracing::warn!(key = %fetch_key, error = %err, "Query fetch failed");
                    Err(Arc::new(err))
                }
            }
        }
        .boxed()
        .shared();

        state.in_flight.insert(
            key.clone(),
            InFlight {
                id,
                fetch: fetch.clone(),
            },
        );
        tokio::spawn(fetch.clone());

        fetch
    }

    /// Marks every entry under `prefix` stale and detaches in-flight fetches
    /// for those keys, so the next read starts a new fetch.
    ///
    /// Returns the number of cached entries marked stale.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        let mut state = self.lock();

        let mut marked = 0;
        for (key, entry) in state.entries.iter_mut() {
            if prefix_matches(prefix, key) {
                entry.invalidated = true;
                marked += 1;
            }
        }

        let before = state.in_flight.len();
        state.in_flight.retain(|key, _| !prefix_matches(prefix, key));
        let detached = before - state.in_flight.len();

        tracing::debug!(%prefix, marked, detached, "Invalidated queries");
        marked
    }

    /// Drops every entry and forgets in-flight fetches.
    pub fn clear(&self) {
        let mut state = self.lock();
        let dropped = state.entries.len();
        state.entries.clear();
        state.in_flight.clear();
        state.epoch = state.epoch.wrapping_add(1);
        tracing::debug!(dropped, "Cleared query cache");
    }

    /// Decodes the cached value for `key` without fetching or checking freshness.
    pub fn peek<T: DeserializeOwned>(&self, key: &QueryKey) -> Result<Option<T>> {
        let data = self.lock().entries.get(key).map(|e| Arc::clone(&e.data));
        match data {
            Some(bytes) => Ok(Some(decode_value(key, &bytes)?)),
            None => Ok(None),
        }
    }

    /// Returns whether the entry for `key` is stale under the cache's
    /// default options, or `None` if nothing is cached.
    ///
    /// Reads judge freshness with their own options; use
    /// [`QueryCache::is_stale_with`] to ask the same question a read would.
    pub fn is_stale(&self, key: &QueryKey) -> Option<bool> {
        self.is_stale_with(key, &self.options)
    }

    /// Returns whether the entry for `key` is stale under `options`.
    pub fn is_stale_with(&self, key: &QueryKey, options: &QueryOptions) -> Option<bool> {
        let state = self.lock();
        let entry = state.entries.get(key)?;
        let freshness = classify(
            Some(entry.fetched_at),
            options.stale_time,
            entry.invalidated,
            Instant::now(),
        );
        Some(freshness == Freshness::Stale)
    }

    /// Returns true if a value is cached for `key`.
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.lock().entries.contains_key(key)
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of fetches currently in flight.
    pub fn in_flight_count(&self) -> usize {
        self.lock().in_flight.len()
    }

    /// Returns a copy of every entry, ordered by key.
    pub fn snapshot(&self) -> BTreeMap<QueryKey, EntrySnapshot> {
        self.lock()
            .entries
            .iter()
            .map(|(key, entry)| {
                (
                    key.clone(),
                    EntrySnapshot {
                        data: entry.data.as_ref().clone(),
                        fetched_at: entry.fetched_at,
                        invalidated: entry.invalidated,
                    },
                )
            })
            .collect()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(QueryOptions::default())
    }
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("QueryCache")
            .field("entries", &state.entries.len())
            .field("in_flight", &state.in_flight.len())
            .field("options", &self.options)
            .finish()
    }
}

/// Cache state stays consistent across a panicking reader, so a poisoned
/// lock is recovered rather than propagated.
fn lock_state(state: &Mutex<CacheState>) -> MutexGuard<'_, CacheState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

//! Staleness policy for cached query results.
//!
//! Pure functions deciding whether a cached value may be served as-is,
//! served while a refetch runs, or must be fetched before anything can be
//! returned.

use std::time::{Duration, Instant};

/// Default time a fetched value stays fresh.
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(30);

/// Per-query behaviour of the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// How long a fetched value is served without refetching.
    pub stale_time: Duration,
    /// Serve stale data immediately and refetch in the background.
    /// When false, a stale read waits for the refetch to finish.
    pub revalidate_in_background: bool,
}

impl QueryOptions {
    /// Creates options with the given stale time and background revalidation on.
    pub fn new(stale_time: Duration) -> Self {
        Self {
            stale_time,
            revalidate_in_background: true,
        }
    }

    /// Sets the stale time.
    pub fn with_stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    /// Disables stale-while-revalidate for this query.
    pub fn wait_for_refetch(mut self) -> Self {
        self.revalidate_in_background = false;
        self
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_TIME)
    }
}

/// Freshness of a cache entry at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Cached and younger than its stale time.
    Fresh,
    /// Cached, but past its stale time or explicitly invalidated.
    Stale,
    /// Nothing cached for the key.
    Missing,
}

/// What a read should do given the entry freshness and query options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPlan {
    /// Return the cached value, no fetch.
    ServeCached,
    /// Return the cached value and start (or join) a background refetch.
    ServeStaleAndRefetch,
    /// Start (or join) a fetch and wait for its result.
    FetchAndWait,
}

/// Classifies an entry fetched at `fetched_at`.
///
/// `fetched_at` is `None` when the key has never been fetched successfully.
/// A value is fresh while `now - fetched_at < stale_time`, so a zero stale
/// time makes every cached value stale immediately.
pub fn classify(
    fetched_at: Option<Instant>,
    stale_time: Duration,
    invalidated: bool,
    now: Instant,
) -> Freshness {
    let Some(fetched_at) = fetched_at else {
        return Freshness::Missing;
    };
    if invalidated {
        return Freshness::Stale;
    }
    if now.saturating_duration_since(fetched_at) < stale_time {
        Freshness::Fresh
    } else {
        Freshness::Stale
    }
}

/// Decides how to serve a read.
pub fn plan_read(freshness: Freshness, options: &QueryOptions) -> ReadPlan {
    match freshness {
        Freshness::Fresh => ReadPlan::ServeCached,
        Freshness::Stale if options.revalidate_in_background => ReadPlan::ServeStaleAndRefetch,
        Freshness::Stale | Freshness::Missing => ReadPlan::FetchAndWait,
    }
}

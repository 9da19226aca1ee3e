//! Pure prefix matching for query keys.
//!
//! An invalidation prefix is itself a [`QueryKey`]. Segments are compared
//! literally, position by position; no segment value has special meaning,
//! so ids coming from users can never widen a match.

use super::QueryKey;

/// Checks if `prefix` is a segment-wise prefix of `key`.
///
/// # Examples
///
/// ```
/// use hostly_core::cache::prefix_matches;
/// use hostly_core::query_key;
///
/// // Exact prefix
/// assert!(prefix_matches(&query_key!["pages", "w1"], &query_key!["pages", "w1"]));
///
/// // Shorter prefix
/// assert!(prefix_matches(&query_key!["orders"], &query_key!["orders", "r1", "pending"]));
///
/// // No match
/// assert!(!prefix_matches(&query_key!["pages", "w1"], &query_key!["pages", "w2"]));
/// ```
pub fn prefix_matches(prefix: &QueryKey, key: &QueryKey) -> bool {
    let prefix = prefix.segments();
    let key = key.segments();

    prefix.len() <= key.len() && prefix.iter().zip(key).all(|(p, k)| p == k)
}

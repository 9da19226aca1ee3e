use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::OrderStatus;

/// An ordered tuple of string segments identifying one cached request.
///
/// Keys compare structurally: two keys built independently from the same
/// segments are equal and address the same cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    /// Creates a key from any sequence of segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Returns a new key with one more segment appended.
    pub fn with(mut self, segment: impl Into<String>) -> Self {
        self.0.push(segment.into());
        self
    }

    /// Returns the key segments in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the key has no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(":"))
    }
}

impl<S: Into<String>> FromIterator<S> for QueryKey {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Builds a [`QueryKey`] from a list of segments.
///
/// ```
/// use hostly_core::query_key;
///
/// let key = query_key!["pages", "w1"];
/// assert_eq!(key.to_string(), "pages:w1");
/// ```
#[macro_export]
macro_rules! query_key {
    ($($segment:expr),* $(,)?) => {
        $crate::cache::QueryKey::new([$(::std::string::String::from($segment)),*])
    };
}

/// Returns the key for the restaurants owned by the signed-in user.
pub fn restaurants_key() -> QueryKey {
    query_key!["restaurants", "me"]
}

/// Returns the prefix covering every restaurant list.
pub fn restaurants_prefix() -> QueryKey {
    query_key!["restaurants"]
}

/// Returns the key for a single restaurant.
pub fn restaurant_key(restaurant_id: &str) -> QueryKey {
    query_key!["restaurant", restaurant_id]
}

/// Returns the key for the websites of a restaurant.
pub fn websites_key(restaurant_id: &str) -> QueryKey {
    query_key!["websites", restaurant_id]
}

/// Returns the key for a single website.
pub fn website_key(website_id: &str) -> QueryKey {
    query_key!["website", website_id]
}

/// Returns the key for the pages of a website.
pub fn pages_key(website_id: &str) -> QueryKey {
    query_key!["pages", website_id]
}

/// Returns the key for a single page.
pub fn page_key(page_id: &str) -> QueryKey {
    query_key!["page", page_id]
}

/// Returns the key for the orders of a restaurant, optionally filtered by status.
///
/// The unfiltered key is a prefix of every filtered key, so invalidating
/// `orders_key(id, None)` also covers the filtered lists.
pub fn orders_key(restaurant_id: &str, status: Option<OrderStatus>) -> QueryKey {
    let key = query_key!["orders", restaurant_id];
    match status {
        Some(status) => key.with(status.as_str()),
        None => key,
    }
}

/// Returns the key for a single order.
pub fn order_key(order_id: &str) -> QueryKey {
    query_key!["order", order_id]
}

/// Returns the key for the dashboard aggregates of a restaurant.
pub fn dashboard_key(restaurant_id: &str) -> QueryKey {
    query_key!["dashboard", restaurant_id]
}

/// Returns the key for the user settings.
pub fn settings_key() -> QueryKey {
    query_key!["settings"]
}

/// Returns the key for the signed-in user.
pub fn me_key() -> QueryKey {
    query_key!["me"]
}

/// Returns the key for a search query. The term is trimmed and lowercased so
/// that equivalent searches share an entry.
pub fn search_key(term: &str) -> QueryKey {
    query_key!["search", term.trim().to_lowercase()]
}

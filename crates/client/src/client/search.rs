//! Dashboard search.

use super::HostlyClient;
use crate::error::Result;
use hostly_core::models::SearchResults;
use reqwest::Method;

impl HostlyClient {
    /// Search restaurants, orders and pages.
    pub async fn search(&self, term: &str) -> Result<SearchResults> {
        self.send(
            self.request(Method::GET, "/api/search")
                .query(&[("q", term)]),
        )
        .await
    }
}

//! Dashboard aggregate operations.

use super::HostlyClient;
use crate::error::Result;
use hostly_core::models::DashboardStats;
use reqwest::Method;

impl HostlyClient {
    /// Get today's aggregates for a restaurant.
    pub async fn dashboard_stats(&self, restaurant_id: &str) -> Result<DashboardStats> {
        self.send(self.request(
            Method::GET,
            &format!("/api/restaurants/{}/dashboard", restaurant_id),
        ))
        .await
    }
}

use serde::{Deserialize, Serialize};

use super::{Order, Restaurant, WebsitePage};

/// Aggregates shown on the dashboard home for one restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub restaurant_id: String,
    pub orders_today: u32,
    pub revenue_today_cents: u64,
    pub pending_orders: u32,
    pub average_order_cents: u64,
}

/// Results of the dashboard-wide search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub pages: Vec<WebsitePage>,
}

impl SearchResults {
    /// Returns the number of hits across all groups.
    pub fn total(&self) -> usize {
        self.restaurants.len() + self.orders.len() + self.pages.len()
    }

    /// Returns true if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A restaurant (tenant) managed from the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    /// Tenant label used to build the public site URL.
    pub subdomain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// ISO 4217 currency code.
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl Restaurant {
    /// Creates a restaurant with the given identity and defaults elsewhere.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        subdomain: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subdomain: subdomain.into(),
            description: None,
            address: None,
            phone: None,
            currency: "USD".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the currency code.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the creation timestamp (useful for testing).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

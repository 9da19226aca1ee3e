use serde::{Deserialize, Serialize};

/// The signed-in dashboard user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Per-user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// BCP 47 language tag, e.g. `en` or `es-MX`.
    pub language: String,
    /// IANA timezone name.
    pub timezone: String,
    pub notifications_enabled: bool,
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            timezone: "UTC".to_string(),
            notifications_enabled: true,
            currency: "USD".to_string(),
        }
    }
}

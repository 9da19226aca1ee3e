//! User settings operations.

use super::HostlyClient;
use crate::error::Result;
use hostly_core::models::{Settings, UpdateSettingsRequest};
use reqwest::Method;

impl HostlyClient {
    /// Get the settings of the signed-in user.
    pub async fn get_settings(&self) -> Result<Settings> {
        self.send(self.request(Method::GET, "/api/settings")).await
    }

    /// Update the settings of the signed-in user.
    pub async fn update_settings(&self, req: &UpdateSettingsRequest) -> Result<Settings> {
        self.send(self.request(Method::PUT, "/api/settings").json(req))
            .await
    }
}

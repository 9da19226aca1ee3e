//! Signed-in user operations.

use super::HostlyClient;
use crate::error::Result;
use hostly_core::models::{UpdateMeRequest, User};
use reqwest::Method;

impl HostlyClient {
    /// Get the signed-in user.
    pub async fn me(&self) -> Result<User> {
        self.send(self.request(Method::GET, "/api/users/me")).await
    }

    /// Update the signed-in user.
    pub async fn update_me(&self, req: &UpdateMeRequest) -> Result<User> {
        self.send(self.request(Method::PUT, "/api/users/me").json(req))
            .await
    }

    /// Delete the signed-in user's account.
    pub async fn delete_me(&self) -> Result<()> {
        self.send_empty(self.request(Method::DELETE, "/api/users/me"))
            .await
    }
}

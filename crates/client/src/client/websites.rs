//! Website API operations.

use super::HostlyClient;
use crate::error::Result;
use hostly_core::models::{CreateWebsiteRequest, UpdateWebsiteRequest, Website};
use reqwest::Method;

impl HostlyClient {
    /// List the websites of a restaurant.
    pub async fn list_websites(&self, restaurant_id: &str) -> Result<Vec<Website>> {
        self.send(self.request(
            Method::GET,
            &format!("/api/restaurants/{}/websites", restaurant_id),
        ))
        .await
    }

    /// Get website by ID.
    pub async fn get_website(&self, id: &str) -> Result<Website> {
        self.send(self.request(Method::GET, &format!("/api/websites/{}", id)))
            .await
    }

    /// Create a new website.
    pub async fn create_website(&self, req: &CreateWebsiteRequest) -> Result<Website> {
        self.send(self.request(Method::POST, "/api/websites").json(req))
            .await
    }

    /// Update a website.
    pub async fn update_website(&self, id: &str, req: &UpdateWebsiteRequest) -> Result<Website> {
        self.send(
            self.request(Method::PUT, &format!("/api/websites/{}", id))
                .json(req),
        )
        .await
    }

    /// Publish a website on its tenant subdomain.
    pub async fn publish_website(&self, id: &str) -> Result<Website> {
        self.send(self.request(Method::POST, &format!("/api/websites/{}/publish", id)))
            .await
    }

    /// Delete website by ID.
    pub async fn delete_website(&self, id: &str) -> Result<()> {
        self.send_empty(self.request(Method::DELETE, &format!("/api/websites/{}", id)))
            .await
    }
}

//! Website page API operations.

use super::HostlyClient;
use crate::error::Result;
use hostly_core::models::{
    CreatePageRequest, ReorderPagesRequest, UpdatePageRequest, WebsitePage,
};
use reqwest::Method;

impl HostlyClient {
    /// List the pages of a website in navigation order.
    pub async fn list_pages(&self, website_id: &str) -> Result<Vec<WebsitePage>> {
        self.send(self.request(Method::GET, &format!("/api/websites/{}/pages", website_id)))
            .await
    }

    /// Get page by ID.
    pub async fn get_page(&self, id: &str) -> Result<WebsitePage> {
        self.send(self.request(Method::GET, &format!("/api/pages/{}", id)))
            .await
    }

    /// Create a new page.
    pub async fn create_page(&self, req: &CreatePageRequest) -> Result<WebsitePage> {
        self.send(self.request(Method::POST, "/api/pages").json(req))
            .await
    }

    /// Update a page.
    pub async fn update_page(&self, id: &str, req: &UpdatePageRequest) -> Result<WebsitePage> {
        self.send(self.request(Method::PUT, &format!("/api/pages/{}", id)).json(req))
            .await
    }

    /// Move the pages of a website into a new order.
    pub async fn reorder_pages(
        &self,
        website_id: &str,
        req: &ReorderPagesRequest,
    ) -> Result<Vec<WebsitePage>> {
        self.send(
            self.request(
                Method::PUT,
                &format!("/api/websites/{}/pages/order", website_id),
            )
            .json(req),
        )
        .await
    }

    /// Delete page by ID.
    pub async fn delete_page(&self, id: &str) -> Result<()> {
        self.send_empty(self.request(Method::DELETE, &format!("/api/pages/{}", id)))
            .await
    }
}

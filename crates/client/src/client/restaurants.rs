//! Restaurant API operations.

use super::HostlyClient;
use crate::error::Result;
use hostly_core::models::{CreateRestaurantRequest, Restaurant, UpdateRestaurantRequest};
use reqwest::Method;

impl HostlyClient {
    /// List the restaurants of the signed-in user.
    pub async fn list_my_restaurants(&self) -> Result<Vec<Restaurant>> {
        self.send(self.request(Method::GET, "/api/restaurants/me"))
            .await
    }

    /// Get restaurant by ID.
    pub async fn get_restaurant(&self, id: &str) -> Result<Restaurant> {
        self.send(self.request(Method::GET, &format!("/api/restaurants/{}", id)))
            .await
    }

    /// Create a new restaurant.
    pub async fn create_restaurant(&self, req: &CreateRestaurantRequest) -> Result<Restaurant> {
        self.send(self.request(Method::POST, "/api/restaurants").json(req))
            .await
    }

    /// Update a restaurant.
    pub async fn update_restaurant(
        &self,
        id: &str,
        req: &UpdateRestaurantRequest,
    ) -> Result<Restaurant> {
        self.send(
            self.request(Method::PUT, &format!("/api/restaurants/{}", id))
                .json(req),
        )
        .await
    }

    /// Delete restaurant by ID.
    pub async fn delete_restaurant(&self, id: &str) -> Result<()> {
        self.send_empty(self.request(Method::DELETE, &format!("/api/restaurants/{}", id)))
            .await
    }
}

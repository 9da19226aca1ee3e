//! Order API operations.

use super::HostlyClient;
use crate::error::Result;
use hostly_core::models::{CreateOrderRequest, Order, OrderStatus, UpdateOrderStatusRequest};
use reqwest::Method;

impl HostlyClient {
    /// List the orders of a restaurant, optionally filtered by status.
    pub async fn list_orders(
        &self,
        restaurant_id: &str,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>> {
        let mut request = self.request(
            Method::GET,
            &format!("/api/restaurants/{}/orders", restaurant_id),
        );
        if let Some(status) = status {
            request = request.query(&[("status", status.as_str())]);
        }
        self.send(request).await
    }

    /// Get order by ID.
    pub async fn get_order(&self, id: &str) -> Result<Order> {
        self.send(self.request(Method::GET, &format!("/api/orders/{}", id)))
            .await
    }

    /// Place a new order.
    pub async fn create_order(&self, req: &CreateOrderRequest) -> Result<Order> {
        self.send(self.request(Method::POST, "/api/orders").json(req))
            .await
    }

    /// Move an order to a new status.
    pub async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<Order> {
        self.send(
            self.request(Method::PATCH, &format!("/api/orders/{}/status", id))
                .json(&UpdateOrderStatusRequest { status }),
        )
        .await
    }
}

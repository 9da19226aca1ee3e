use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::OrderError;

/// A customer order placed through the public site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub restaurant_id: String,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub total_cents: u64,
    pub created_at: DateTime<Utc>,
}

/// A line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item_id: Option<String>,
    pub name: String,
    pub quantity: u32,
    pub unit_price_cents: u64,
}

impl OrderItem {
    /// Creates an order line.
    pub fn new(name: impl Into<String>, quantity: u32, unit_price_cents: u64) -> Self {
        Self {
            menu_item_id: None,
            name: name.into(),
            quantity,
            unit_price_cents,
        }
    }

    /// Returns quantity times unit price.
    pub fn line_total_cents(&self) -> u64 {
        u64::from(self.quantity) * self.unit_price_cents
    }
}

/// Lifecycle of an order in the kitchen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Returns true if no further transition is allowed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    fn rank(&self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Confirmed => 1,
            OrderStatus::Preparing => 2,
            OrderStatus::Ready => 3,
            OrderStatus::Completed => 4,
            OrderStatus::Cancelled => 5,
        }
    }

    /// Returns true if an order in this status may move to `next`.
    ///
    /// Orders only move forward through the kitchen flow, and can be
    /// cancelled from any non-terminal status.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        match next {
            OrderStatus::Cancelled => true,
            _ => next.rank() > self.rank(),
        }
    }

    /// Checks a transition, returning an error naming both statuses.
    pub fn check_transition(&self, next: OrderStatus) -> Result<(), OrderError> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(OrderError::InvalidTransition {
                from: *self,
                to: next,
            })
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| OrderError::UnknownStatus(s.to_string()))
    }
}

/// How the customer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Paid online when the order is placed.
    PayNow,
    /// Paid at the counter on pickup.
    PayOnPickup,
}

impl PaymentMethod {
    /// Returns the wire name of the payment method.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::PayNow => "pay_now",
            PaymentMethod::PayOnPickup => "pay_on_pickup",
        }
    }

    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::PayNow => "Paid online",
            PaymentMethod::PayOnPickup => "Pay on pickup",
        }
    }
}

/// Sums the line totals of `items`.
pub fn order_total_cents(items: &[OrderItem]) -> u64 {
    items.iter().map(OrderItem::line_total_cents).sum()
}

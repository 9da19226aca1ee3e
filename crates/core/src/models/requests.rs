//! API request payloads.
//!
//! Pure data types serialized as the JSON bodies of write endpoints.

use serde::{Deserialize, Serialize};

use super::{OrderItem, OrderStatus, PaymentMethod, WebsiteSection};

/// Request payload for creating a restaurant during onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub subdomain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl CreateRestaurantRequest {
    /// Create a request with the required fields.
    pub fn new(name: impl Into<String>, subdomain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subdomain: subdomain.into(),
            description: None,
            address: None,
            phone: None,
            currency: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the currency code.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

/// Request payload for updating a restaurant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Request payload for creating a website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebsiteRequest {
    pub restaurant_id: String,
    pub name: String,
    pub subdomain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl CreateWebsiteRequest {
    /// Create a request with the required fields.
    pub fn new(
        restaurant_id: impl Into<String>,
        name: impl Into<String>,
        subdomain: impl Into<String>,
    ) -> Self {
        Self {
            restaurant_id: restaurant_id.into(),
            name: name.into(),
            subdomain: subdomain.into(),
            theme: None,
        }
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }
}

/// Request payload for updating a website.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebsiteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Request payload for creating a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
    pub website_id: String,
    pub title: String,
    /// Derived from the title when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<WebsiteSection>,
}

impl CreatePageRequest {
    /// Create a request for an empty page.
    pub fn new(website_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            website_id: website_id.into(),
            title: title.into(),
            slug: None,
            sections: Vec::new(),
        }
    }

    /// Set an explicit slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Append a section.
    pub fn with_section(mut self, section: WebsiteSection) -> Self {
        self.sections.push(section);
        self
    }
}

/// Request payload for updating a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<WebsiteSection>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

/// Request payload for reordering the pages of a website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderPagesRequest {
    /// Page ids in their new navigation order.
    pub page_ids: Vec<String>,
}

/// Request payload for placing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub restaurant_id: String,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub items: Vec<OrderItem>,
    pub payment_method: PaymentMethod,
}

impl CreateOrderRequest {
    /// Create an order request without items.
    pub fn new(
        restaurant_id: impl Into<String>,
        customer_name: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            restaurant_id: restaurant_id.into(),
            customer_name: customer_name.into(),
            customer_phone: None,
            items: Vec::new(),
            payment_method,
        }
    }

    /// Set the customer phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.customer_phone = Some(phone.into());
        self
    }

    /// Append an order line.
    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }
}

/// Request payload for moving an order to a new status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// Request payload for updating user settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl UpdateSettingsRequest {
    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Request payload for updating the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

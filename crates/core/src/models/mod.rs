//! Backend DTOs and request payloads.
//!
//! Every type here is an immutable snapshot of an entity owned by the remote
//! backend. Fields are camelCase on the wire.

mod dashboard;
mod envelope;
mod error;
mod operations;
mod order;
mod requests;
mod restaurant;
mod user;
mod website;

pub use dashboard::{DashboardStats, SearchResults};
pub use envelope::ApiEnvelope;
pub use error::{OrderError, ValidationError};
pub use operations::{
    prepare_create_page, slugify, validate_create_order, validate_create_restaurant,
    validate_create_website, validate_search_term, validate_slug, validate_text, MAX_NAME_LEN,
    MAX_TITLE_LEN, MIN_SEARCH_LEN,
};
pub use order::{order_total_cents, Order, OrderItem, OrderStatus, PaymentMethod};
pub use requests::{
    CreateOrderRequest, CreatePageRequest, CreateRestaurantRequest, CreateWebsiteRequest,
    ReorderPagesRequest, UpdateMeRequest, UpdateOrderStatusRequest, UpdatePageRequest,
    UpdateRestaurantRequest, UpdateSettingsRequest, UpdateWebsiteRequest,
};
pub use restaurant::Restaurant;
pub use user::{Settings, User};
pub use website::{HeroVariant, MenuCategory, MenuItem, Website, WebsitePage, WebsiteSection};

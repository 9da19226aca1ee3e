//! Invalidation rules for mutations.
//!
//! Every write the client can perform is described by a [`MutationKind`].
//! The kind declares which cached queries become stale once the write
//! succeeds, and which local side effects follow. Nothing here touches the
//! cache; the executor in the client crate applies the result.

use super::keys::{
    dashboard_key, me_key, order_key, orders_key, page_key, pages_key, restaurant_key,
    restaurants_prefix, settings_key, website_key, websites_key,
};
use super::QueryKey;

/// Local storage key holding the selected restaurant/location.
pub const LOCATION_STORAGE_KEY: &str = "location-storage";

/// Cache entries to invalidate after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidationSet {
    /// Mark every entry under any of these prefixes stale.
    Prefixes(Vec<QueryKey>),
    /// Drop the whole cache.
    All,
}

/// Local effects that run after the cache has been updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    /// Remove a key from the persisted local store.
    RemoveLocalKey(&'static str),
}

/// A write operation against the backend, with the identifiers its
/// invalidation set depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    CreateRestaurant,
    UpdateRestaurant { restaurant_id: String },
    DeleteRestaurant { restaurant_id: String },
    CreateWebsite { restaurant_id: String },
    UpdateWebsite { restaurant_id: String, website_id: String },
    PublishWebsite { restaurant_id: String, website_id: String },
    DeleteWebsite { restaurant_id: String, website_id: String },
    CreatePage { website_id: String },
    UpdatePage { website_id: String, page_id: String },
    DeletePage { website_id: String, page_id: String },
    ReorderPages { website_id: String },
    CreateOrder { restaurant_id: String },
    UpdateOrderStatus { restaurant_id: String, order_id: String },
    UpdateSettings,
    UpdateMe,
    DeleteMe,
}

impl MutationKind {
    /// Returns a stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            MutationKind::CreateRestaurant => "create_restaurant",
            MutationKind::UpdateRestaurant { .. } => "update_restaurant",
            MutationKind::DeleteRestaurant { .. } => "delete_restaurant",
            MutationKind::CreateWebsite { .. } => "create_website",
            MutationKind::UpdateWebsite { .. } => "update_website",
            MutationKind::PublishWebsite { .. } => "publish_website",
            MutationKind::DeleteWebsite { .. } => "delete_website",
            MutationKind::CreatePage { .. } => "create_page",
            MutationKind::UpdatePage { .. } => "update_page",
            MutationKind::DeletePage { .. } => "delete_page",
            MutationKind::ReorderPages { .. } => "reorder_pages",
            MutationKind::CreateOrder { .. } => "create_order",
            MutationKind::UpdateOrderStatus { .. } => "update_order_status",
            MutationKind::UpdateSettings => "update_settings",
            MutationKind::UpdateMe => "update_me",
            MutationKind::DeleteMe => "delete_me",
        }
    }

    /// Returns the cache entries this mutation makes stale.
    pub fn invalidation_set(&self) -> InvalidationSet {
        let prefixes = match self {
            MutationKind::CreateRestaurant => vec![restaurants_prefix()],
            MutationKind::UpdateRestaurant { restaurant_id }
            | MutationKind::DeleteRestaurant { restaurant_id } => {
                vec![restaurants_prefix(), restaurant_key(restaurant_id)]
            }
            MutationKind::CreateWebsite { restaurant_id } => vec![websites_key(restaurant_id)],
            MutationKind::UpdateWebsite {
                restaurant_id,
                website_id,
            }
            | MutationKind::PublishWebsite {
                restaurant_id,
                website_id,
            } => vec![websites_key(restaurant_id), website_key(website_id)],
            MutationKind::DeleteWebsite {
                restaurant_id,
                website_id,
            } => vec![
                websites_key(restaurant_id),
                website_key(website_id),
                pages_key(website_id),
            ],
            MutationKind::CreatePage { website_id } | MutationKind::ReorderPages { website_id } => {
                vec![pages_key(website_id)]
            }
            MutationKind::UpdatePage {
                website_id,
                page_id,
            }
            | MutationKind::DeletePage {
                website_id,
                page_id,
            } => vec![pages_key(website_id), page_key(page_id)],
            MutationKind::CreateOrder { restaurant_id } => {
                vec![orders_key(restaurant_id, None), dashboard_key(restaurant_id)]
            }
            MutationKind::UpdateOrderStatus {
                restaurant_id,
                order_id,
            } => vec![
                orders_key(restaurant_id, None),
                order_key(order_id),
                dashboard_key(restaurant_id),
            ],
            MutationKind::UpdateSettings => vec![settings_key()],
            MutationKind::UpdateMe => vec![me_key()],
            MutationKind::DeleteMe => return InvalidationSet::All,
        };
        InvalidationSet::Prefixes(prefixes)
    }

    /// Returns the local side effects, in the order they must run.
    pub fn side_effects(&self) -> &'static [SideEffect] {
        match self {
            MutationKind::DeleteMe => &[SideEffect::RemoveLocalKey(LOCATION_STORAGE_KEY)],
            _ => &[],
        }
    }
}

mod error;
mod invalidation;
mod keys;
mod patterns;
mod policy;
mod serialization;

pub use error::{CacheError, Result};
pub use invalidation::{InvalidationSet, MutationKind, SideEffect, LOCATION_STORAGE_KEY};
pub use keys::{
    dashboard_key, me_key, order_key, orders_key, page_key, pages_key, restaurant_key,
    restaurants_key, restaurants_prefix, search_key, settings_key, website_key, websites_key,
    QueryKey,
};
pub use patterns::prefix_matches;
pub use policy::{
    classify, plan_read, Freshness, QueryOptions, ReadPlan, DEFAULT_STALE_TIME,
};
pub use serialization::{decode_value, encode_value};

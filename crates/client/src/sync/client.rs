//! Cached facade over [`HostlyClient`].
//!
//! Reads go through the [`QueryCache`] under the key builders from
//! `hostly_core::cache`; writes go through the [`MutationExecutor`], which
//! invalidates the affected keys once the server has accepted the write.

use std::sync::Arc;

use hostly_core::cache::{
    dashboard_key, me_key, order_key, orders_key, page_key, pages_key, restaurant_key,
    restaurants_key, search_key, settings_key, website_key, websites_key, MutationKind,
    QueryOptions, LOCATION_STORAGE_KEY,
};
use hostly_core::models::{
    prepare_create_page, validate_create_order, validate_create_restaurant,
    validate_create_website, validate_search_term, CreateOrderRequest, CreatePageRequest,
    CreateRestaurantRequest, CreateWebsiteRequest, DashboardStats, Order, OrderStatus,
    ReorderPagesRequest, Restaurant, SearchResults, Settings, UpdateMeRequest,
    UpdatePageRequest, UpdateRestaurantRequest, UpdateSettingsRequest, UpdateWebsiteRequest,
    User, Website, WebsitePage,
};
use hostly_core::store::LocalStore;

use super::cache::QueryCache;
use super::executor::MutationExecutor;
use super::local_store::{FileLocalStore, LocationState};
use crate::client::HostlyClient;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// HTTP client with a shared query cache in front of it.
#[derive(Clone)]
pub struct SyncClient {
    api: HostlyClient,
    cache: QueryCache,
    executor: MutationExecutor,
    local_store: Arc<dyn LocalStore>,
}

impl SyncClient {
    pub fn new(api: HostlyClient, cache: QueryCache, local_store: Arc<dyn LocalStore>) -> Self {
        let executor = MutationExecutor::new(cache.clone(), Arc::clone(&local_store));
        Self {
            api,
            cache,
            executor,
            local_store,
        }
    }

    /// Builds the client, cache and file-backed local store from configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let api = HostlyClient::from_config(config)?;
        let cache = QueryCache::new(config.query_options());
        let local_store: Arc<dyn LocalStore> = Arc::new(FileLocalStore::new(&config.state_dir));
        Ok(Self::new(api, cache, local_store))
    }

    pub fn api(&self) -> &HostlyClient {
        &self.api
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn local_store(&self) -> &Arc<dyn LocalStore> {
        &self.local_store
    }

    // Queries

    /// Restaurants owned by the signed-in user.
    pub async fn user_restaurants(&self) -> Result<Vec<Restaurant>> {
        let api = self.api.clone();
        self.cache
            .get(restaurants_key(), move || async move {
                api.list_my_restaurants().await
            })
            .await
    }

    pub async fn restaurant(&self, id: &str) -> Result<Restaurant> {
        let api = self.api.clone();
        let id = id.to_string();
        self.cache
            .get(restaurant_key(&id), move || async move {
                api.get_restaurant(&id).await
            })
            .await
    }

    pub async fn websites(&self, restaurant_id: &str) -> Result<Vec<Website>> {
        let api = self.api.clone();
        let restaurant_id = restaurant_id.to_string();
        self.cache
            .get(websites_key(&restaurant_id), move || async move {
                api.list_websites(&restaurant_id).await
            })
            .await
    }

    pub async fn website(&self, id: &str) -> Result<Website> {
        let api = self.api.clone();
        let id = id.to_string();
        self.cache
            .get(website_key(&id), move || async move {
                api.get_website(&id).await
            })
            .await
    }

    /// Pages of a website, in navigation order.
    pub async fn pages(&self, website_id: &str) -> Result<Vec<WebsitePage>> {
        self.pages_with(website_id, self.cache.options()).await
    }

    /// Pages of a website with explicit query options.
    pub async fn pages_with(
        &self,
        website_id: &str,
        options: QueryOptions,
    ) -> Result<Vec<WebsitePage>> {
        let api = self.api.clone();
        let website_id = website_id.to_string();
        self.cache
            .get_with(pages_key(&website_id), options, move || async move {
                api.list_pages(&website_id).await
            })
            .await
    }

    pub async fn page(&self, id: &str) -> Result<WebsitePage> {
        let api = self.api.clone();
        let id = id.to_string();
        self.cache
            .get(page_key(&id), move || async move { api.get_page(&id).await })
            .await
    }

    /// Orders of a restaurant. Each status filter is cached separately.
    pub async fn orders(
        &self,
        restaurant_id: &str,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>> {
        let api = self.api.clone();
        let restaurant_id = restaurant_id.to_string();
        self.cache
            .get(orders_key(&restaurant_id, status), move || async move {
                api.list_orders(&restaurant_id, status).await
            })
            .await
    }

    pub async fn order(&self, id: &str) -> Result<Order> {
        let api = self.api.clone();
        let id = id.to_string();
        self.cache
            .get(order_key(&id), move || async move { api.get_order(&id).await })
            .await
    }

    pub async fn dashboard_stats(&self, restaurant_id: &str) -> Result<DashboardStats> {
        let api = self.api.clone();
        let restaurant_id = restaurant_id.to_string();
        self.cache
            .get(dashboard_key(&restaurant_id), move || async move {
                api.dashboard_stats(&restaurant_id).await
            })
            .await
    }

    pub async fn settings(&self) -> Result<Settings> {
        let api = self.api.clone();
        self.cache
            .get(settings_key(), move || async move { api.get_settings().await })
            .await
    }

    /// The signed-in user.
    pub async fn me(&self) -> Result<User> {
        let api = self.api.clone();
        self.cache
            .get(me_key(), move || async move { api.me().await })
            .await
    }

    /// Searches restaurants, orders and pages.
    ///
    /// Terms differing only in case or surrounding whitespace share a cache
    /// entry. Too-short terms are rejected without a request.
    pub async fn search(&self, term: &str) -> Result<SearchResults> {
        let term = validate_search_term(term)?.to_string();
        let api = self.api.clone();
        self.cache
            .get(search_key(&term), move || async move { api.search(&term).await })
            .await
    }

    // Mutations

    pub async fn create_restaurant(&self, req: &CreateRestaurantRequest) -> Result<Restaurant> {
        validate_create_restaurant(req)?;
        self.executor
            .execute(
                MutationKind::CreateRestaurant,
                self.api.create_restaurant(req),
            )
            .await
    }

    pub async fn update_restaurant(
        &self,
        id: &str,
        req: &UpdateRestaurantRequest,
    ) -> Result<Restaurant> {
        self.executor
            .execute(
                MutationKind::UpdateRestaurant {
                    restaurant_id: id.to_string(),
                },
                self.api.update_restaurant(id, req),
            )
            .await
    }

    pub async fn delete_restaurant(&self, id: &str) -> Result<()> {
        self.executor
            .execute(
                MutationKind::DeleteRestaurant {
                    restaurant_id: id.to_string(),
                },
                self.api.delete_restaurant(id),
            )
            .await
    }

    pub async fn create_website(&self, req: &CreateWebsiteRequest) -> Result<Website> {
        validate_create_website(req)?;
        self.executor
            .execute(
                MutationKind::CreateWebsite {
                    restaurant_id: req.restaurant_id.clone(),
                },
                self.api.create_website(req),
            )
            .await
    }

    pub async fn update_website(
        &self,
        restaurant_id: &str,
        website_id: &str,
        req: &UpdateWebsiteRequest,
    ) -> Result<Website> {
        self.executor
            .execute(
                MutationKind::UpdateWebsite {
                    restaurant_id: restaurant_id.to_string(),
                    website_id: website_id.to_string(),
                },
                self.api.update_website(website_id, req),
            )
            .await
    }

    pub async fn publish_website(&self, restaurant_id: &str, website_id: &str) -> Result<Website> {
        self.executor
            .execute(
                MutationKind::PublishWebsite {
                    restaurant_id: restaurant_id.to_string(),
                    website_id: website_id.to_string(),
                },
                self.api.publish_website(website_id),
            )
            .await
    }

    pub async fn delete_website(&self, restaurant_id: &str, website_id: &str) -> Result<()> {
        self.executor
            .execute(
                MutationKind::DeleteWebsite {
                    restaurant_id: restaurant_id.to_string(),
                    website_id: website_id.to_string(),
                },
                self.api.delete_website(website_id),
            )
            .await
    }

    /// Creates a page, deriving the slug from the title when none is given.
    pub async fn create_page(&self, req: CreatePageRequest) -> Result<WebsitePage> {
        let req = prepare_create_page(req)?;
        self.executor
            .execute(
                MutationKind::CreatePage {
                    website_id: req.website_id.clone(),
                },
                self.api.create_page(&req),
            )
            .await
    }

    pub async fn update_page(
        &self,
        website_id: &str,
        page_id: &str,
        req: &UpdatePageRequest,
    ) -> Result<WebsitePage> {
        self.executor
            .execute(
                MutationKind::UpdatePage {
                    website_id: website_id.to_string(),
                    page_id: page_id.to_string(),
                },
                self.api.update_page(page_id, req),
            )
            .await
    }

    pub async fn delete_page(&self, website_id: &str, page_id: &str) -> Result<()> {
        self.executor
            .execute(
                MutationKind::DeletePage {
                    website_id: website_id.to_string(),
                    page_id: page_id.to_string(),
                },
                self.api.delete_page(page_id),
            )
            .await
    }

    pub async fn reorder_pages(
        &self,
        website_id: &str,
        req: &ReorderPagesRequest,
    ) -> Result<Vec<WebsitePage>> {
        if req.page_ids.is_empty() {
            return Err(ClientError::InvalidInput(
                "reorder needs at least one page id".to_string(),
            ));
        }
        self.executor
            .execute(
                MutationKind::ReorderPages {
                    website_id: website_id.to_string(),
                },
                self.api.reorder_pages(website_id, req),
            )
            .await
    }

    pub async fn create_order(&self, req: &CreateOrderRequest) -> Result<Order> {
        validate_create_order(req)?;
        self.executor
            .execute(
                MutationKind::CreateOrder {
                    restaurant_id: req.restaurant_id.clone(),
                },
                self.api.create_order(req),
            )
            .await
    }

    /// Moves an order to `status`.
    ///
    /// If the order is cached, an illegal transition is rejected before any
    /// request is made. The server remains the authority otherwise.
    pub async fn update_order_status(
        &self,
        restaurant_id: &str,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<Order> {
        if let Some(order) = self.cache.peek::<Order>(&order_key(order_id))? {
            order.status.check_transition(status)?;
        }
        self.executor
            .execute(
                MutationKind::UpdateOrderStatus {
                    restaurant_id: restaurant_id.to_string(),
                    order_id: order_id.to_string(),
                },
                self.api.update_order_status(order_id, status),
            )
            .await
    }

    pub async fn update_settings(&self, req: &UpdateSettingsRequest) -> Result<Settings> {
        if req.is_empty() {
            return Err(ClientError::InvalidInput(
                "no settings to update".to_string(),
            ));
        }
        self.executor
            .execute(MutationKind::UpdateSettings, self.api.update_settings(req))
            .await
    }

    pub async fn update_me(&self, req: &UpdateMeRequest) -> Result<User> {
        self.executor
            .execute(MutationKind::UpdateMe, self.api.update_me(req))
            .await
    }

    /// Deletes the signed-in account.
    ///
    /// On success every cached query is dropped and the persisted location
    /// is removed, in that order.
    pub async fn delete_me(&self) -> Result<()> {
        self.executor
            .execute(MutationKind::DeleteMe, self.api.delete_me())
            .await
    }

    // Local state

    /// The restaurant selected with [`SyncClient::select_restaurant`], if any.
    pub async fn selected_restaurant(&self) -> Result<Option<String>> {
        let Some(raw) = self.local_store.get(LOCATION_STORAGE_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_str::<LocationState>(&raw) {
            Ok(state) => Ok(Some(state.restaurant_id)),
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring unreadable location state");
                Ok(None)
            }
        }
    }

    /// Persists the selected restaurant.
    pub async fn select_restaurant(&self, restaurant_id: &str) -> Result<()> {
        let state = LocationState {
            restaurant_id: restaurant_id.to_string(),
        };
        let raw = serde_json::to_string(&state)?;
        self.local_store.set(LOCATION_STORAGE_KEY, &raw).await?;
        tracing::info!(restaurant_id, "Selected restaurant");
        Ok(())
    }
}

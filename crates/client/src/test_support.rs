//! In-process API server for client tests.
//!
//! Serves a small seeded dataset over real HTTP on an ephemeral port and
//! counts hits per route, so tests can assert how many requests the client
//! actually made.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use chrono::Utc;
use hostly_core::models::{
    order_total_cents, slugify, ApiEnvelope, CreateOrderRequest, CreatePageRequest,
    DashboardStats, Order, OrderItem, OrderStatus, PaymentMethod, Restaurant, SearchResults,
    Settings, UpdateOrderStatusRequest, UpdateSettingsRequest, User, WebsitePage,
};
use serde::Serialize;

use crate::client::HostlyClient;

pub(crate) const TEST_TOKEN: &str = "test-token";

type SharedState = Arc<ServerState>;

struct ServerState {
    hits: Mutex<HashMap<&'static str, usize>>,
    pages: Mutex<Vec<WebsitePage>>,
    orders: Mutex<Vec<Order>>,
    settings: Mutex<Settings>,
    restaurants_delay_ms: AtomicU64,
    fail_delete_me: AtomicBool,
}

impl ServerState {
    fn seeded() -> Self {
        let order = |id: &str, customer: &str, status: OrderStatus| {
            let items = vec![OrderItem::new("Margherita", 2, 1200)];
            Order {
                id: id.to_string(),
                restaurant_id: "r1".to_string(),
                customer_name: customer.to_string(),
                customer_phone: None,
                total_cents: order_total_cents(&items),
                items,
                status,
                payment_method: PaymentMethod::PayOnPickup,
                created_at: Utc::now(),
            }
        };

        Self {
            hits: Mutex::new(HashMap::new()),
            pages: Mutex::new(vec![WebsitePage::new("p1", "w1", "Menu", "menu")]),
            orders: Mutex::new(vec![
                order("o1", "Ana", OrderStatus::Pending),
                order("o2", "Luis", OrderStatus::Completed),
            ]),
            settings: Mutex::new(Settings::default()),
            restaurants_delay_ms: AtomicU64::new(0),
            fail_delete_me: AtomicBool::new(false),
        }
    }

    fn hit(&self, route: &'static str) {
        *self.hits.lock().unwrap().entry(route).or_default() += 1;
    }
}

fn restaurant() -> Restaurant {
    Restaurant::new("r1", "Trattoria", "trattoria")
}

fn ok<T: Serialize>(data: T) -> Response {
    Json(ApiEnvelope::ok(data)).into_response()
}

fn fail(status: StatusCode, message: &str) -> Response {
    (status, Json(ApiEnvelope::<()>::error(message))).into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    let expected = format!("Bearer {}", TEST_TOKEN);
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(expected.as_str())
}

async fn my_restaurants(State(state): State<SharedState>) -> Response {
    state.hit("restaurants");
    let delay_ms = state.restaurants_delay_ms.load(Ordering::SeqCst);
    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
    ok(vec![restaurant()])
}

async fn get_restaurant(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    state.hit("restaurant");
    if id == "r1" {
        ok(restaurant())
    } else {
        fail(StatusCode::NOT_FOUND, "Restaurant not found")
    }
}

async fn list_pages(State(state): State<SharedState>, Path(website_id): Path<String>) -> Response {
    state.hit("pages");
    let mut pages: Vec<WebsitePage> = state
        .pages
        .lock()
        .unwrap()
        .iter()
        .filter(|page| page.website_id == website_id)
        .cloned()
        .collect();
    pages.sort_by_key(|page| page.position);
    ok(pages)
}

async fn create_page(
    State(state): State<SharedState>,
    Json(req): Json<CreatePageRequest>,
) -> Response {
    state.hit("create_page");
    if req.title == "fail" {
        return fail(StatusCode::UNPROCESSABLE_ENTITY, "Page title rejected");
    }

    let mut pages = state.pages.lock().unwrap();
    let position = pages
        .iter()
        .filter(|page| page.website_id == req.website_id)
        .count() as u32;
    let slug = req.slug.unwrap_or_else(|| slugify(&req.title));
    let mut page = WebsitePage::new(
        format!("p{}", pages.len() + 1),
        req.website_id,
        req.title,
        slug,
    )
    .with_position(position);
    page.sections = req.sections;
    pages.push(page.clone());
    ok(page)
}

async fn get_page(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    state.hit("page");
    let page = state
        .pages
        .lock()
        .unwrap()
        .iter()
        .find(|page| page.id == id)
        .cloned();
    match page {
        Some(page) => ok(page),
        None => fail(StatusCode::NOT_FOUND, "Page not found"),
    }
}

async fn list_orders(
    State(state): State<SharedState>,
    Path(restaurant_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hit("orders");
    let status = params.get("status");
    let orders: Vec<Order> = state
        .orders
        .lock()
        .unwrap()
        .iter()
        .filter(|order| order.restaurant_id == restaurant_id)
        .filter(|order| status.is_none_or(|s| s == order.status.as_str()))
        .cloned()
        .collect();
    ok(orders)
}

async fn get_order(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    state.hit("order");
    let order = state
        .orders
        .lock()
        .unwrap()
        .iter()
        .find(|order| order.id == id)
        .cloned();
    match order {
        Some(order) => ok(order),
        None => fail(StatusCode::NOT_FOUND, "Order not found"),
    }
}

async fn create_order(
    State(state): State<SharedState>,
    Json(req): Json<CreateOrderRequest>,
) -> Response {
    state.hit("create_order");
    let mut orders = state.orders.lock().unwrap();
    let order = Order {
        id: format!("o{}", orders.len() + 1),
        restaurant_id: req.restaurant_id,
        customer_name: req.customer_name,
        customer_phone: req.customer_phone,
        total_cents: order_total_cents(&req.items),
        items: req.items,
        status: OrderStatus::Pending,
        payment_method: req.payment_method,
        created_at: Utc::now(),
    };
    orders.push(order.clone());
    ok(order)
}

async fn update_order_status(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> Response {
    state.hit("update_order_status");
    let mut orders = state.orders.lock().unwrap();
    let Some(order) = orders.iter_mut().find(|order| order.id == id) else {
        return fail(StatusCode::NOT_FOUND, "Order not found");
    };
    if let Err(err) = order.status.check_transition(req.status) {
        return fail(StatusCode::CONFLICT, &err.to_string());
    }
    order.status = req.status;
    ok(order.clone())
}

async fn dashboard(State(state): State<SharedState>, Path(restaurant_id): Path<String>) -> Response {
    state.hit("dashboard");
    let orders = state.orders.lock().unwrap();
    let mine: Vec<&Order> = orders
        .iter()
        .filter(|order| order.restaurant_id == restaurant_id)
        .collect();
    let revenue: u64 = mine.iter().map(|order| order.total_cents).sum();
    let count = mine.len() as u64;
    ok(DashboardStats {
        restaurant_id,
        orders_today: count as u32,
        revenue_today_cents: revenue,
        pending_orders: mine
            .iter()
            .filter(|order| order.status == OrderStatus::Pending)
            .count() as u32,
        average_order_cents: if count == 0 { 0 } else { revenue / count },
    })
}

async fn get_settings(State(state): State<SharedState>) -> Response {
    state.hit("settings");
    ok(state.settings.lock().unwrap().clone())
}

async fn update_settings(
    State(state): State<SharedState>,
    Json(req): Json<UpdateSettingsRequest>,
) -> Response {
    state.hit("update_settings");
    let mut settings = state.settings.lock().unwrap();
    if let Some(language) = req.language {
        settings.language = language;
    }
    if let Some(timezone) = req.timezone {
        settings.timezone = timezone;
    }
    if let Some(enabled) = req.notifications_enabled {
        settings.notifications_enabled = enabled;
    }
    if let Some(currency) = req.currency {
        settings.currency = currency;
    }
    ok(settings.clone())
}

async fn me(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    state.hit("me");
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Missing or invalid token");
    }
    ok(User {
        id: "u1".to_string(),
        name: "Owner".to_string(),
        email: "owner@hostly.test".to_string(),
    })
}

async fn delete_me(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    state.hit("delete_me");
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Missing or invalid token");
    }
    if state.fail_delete_me.load(Ordering::SeqCst) {
        return fail(StatusCode::INTERNAL_SERVER_ERROR, "Account deletion failed");
    }
    Json(ApiEnvelope::<()> {
        success: true,
        message: Some("Account deleted".to_string()),
        data: None,
    })
    .into_response()
}

async fn search(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hit("search");
    let term = params.get("q").map(|q| q.to_lowercase()).unwrap_or_default();
    let matches = |text: &str| text.to_lowercase().contains(&term);

    let results = SearchResults {
        restaurants: [restaurant()]
            .into_iter()
            .filter(|r| matches(&r.name))
            .collect(),
        orders: state
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| matches(&o.customer_name))
            .cloned()
            .collect(),
        pages: state
            .pages
            .lock()
            .unwrap()
            .iter()
            .filter(|p| matches(&p.title))
            .cloned()
            .collect(),
    };
    ok(results)
}

async fn unsuccessful() -> Response {
    Json(ApiEnvelope::<Settings>::error("Maintenance window")).into_response()
}

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/restaurants/me", get(my_restaurants))
        .route("/api/restaurants/{id}", get(get_restaurant))
        .route("/api/restaurants/{id}/orders", get(list_orders))
        .route("/api/restaurants/{id}/dashboard", get(dashboard))
        .route("/api/websites/{id}/pages", get(list_pages))
        .route("/api/pages", post(create_page))
        .route("/api/pages/{id}", get(get_page))
        .route("/api/orders", post(create_order))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}/status", patch(update_order_status))
        .route("/api/settings", get(get_settings).put(update_settings))
        .route("/api/users/me", get(me).delete(delete_me))
        .route("/api/search", get(search))
        .route("/api/test/unsuccessful", get(unsuccessful))
        .with_state(state)
}

/// A running test server. The server task stops with the test runtime.
pub(crate) struct TestServer {
    base_url: String,
    state: SharedState,
}

impl TestServer {
    pub(crate) async fn spawn() -> Self {
        let state = Arc::new(ServerState::seeded());
        let app = router(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub(crate) fn base_url(&self) -> String {
        self.base_url.clone()
    }

    /// A client authenticated with [`TEST_TOKEN`].
    pub(crate) fn client(&self) -> HostlyClient {
        HostlyClient::new(self.base_url()).with_token(TEST_TOKEN)
    }

    /// Number of requests served by `route`.
    pub(crate) fn hits(&self, route: &str) -> usize {
        self.state
            .hits
            .lock()
            .unwrap()
            .get(route)
            .copied()
            .unwrap_or(0)
    }

    /// Delays `GET /api/restaurants/me` so concurrent readers overlap.
    pub(crate) fn delay_restaurants(&self, delay: Duration) {
        self.state
            .restaurants_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Makes `DELETE /api/users/me` answer 500.
    pub(crate) fn fail_delete_me(&self) {
        self.state.fail_delete_me.store(true, Ordering::SeqCst);
    }
}

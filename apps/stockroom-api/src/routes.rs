//! # HTTP Routes
//!
//! Maps HTTP requests onto inventory store calls.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Method  Path                            Store call           Returns   │
//! │  ──────  ──────────────────────────────  ───────────────────  ───────── │
//! │  GET     /                               -                    banner    │
//! │  GET     /health                         len()                status    │
//! │  GET     /inventory                      items()              Item[]    │
//! │  POST    /inventory/addItem              insert()             Item[]    │
//! │  POST    /inventory/addItems             insert_batch()       Item[]    │
//! │  POST    /inventory/upsertItem           upsert_by_name()     Item[]    │
//! │  POST    /inventory/increaseQuantities   increase_quantities  Item[]    │
//! │  GET     /inventory/{search_value}       get()                Item      │
//! │  PUT     /inventory/{code}               update_item_info()   Item[]    │
//! │  DELETE  /inventory/{code}               delete_by_code()     Item[]    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The static segments win over the `{search_value}` capture, so an item
//! literally named `addItem` can only be fetched by its code.
//!
//! Each handler holds the store lock for exactly one store call: a read lock
//! for lookups, the write lock for anything that mutates.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use stockroom_core::{CoreError, Item, ItemInfoUpdate, NewItem, QuantityIncrease};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::ApiResult;
use crate::SharedState;

/// Builds the application router.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/inventory", get(list_inventory))
        .route("/inventory/addItem", post(create_item))
        .route("/inventory/addItems", post(create_items))
        .route("/inventory/upsertItem", post(upsert_item))
        .route("/inventory/increaseQuantities", post(increase_quantities))
        .route(
            "/inventory/{search_value}",
            get(get_item).put(update_item_info).delete(delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Service Endpoints
// =============================================================================

async fn home() -> impl IntoResponse {
    "Stockroom inventory service"
}

/// Health check body.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    items: usize,
    server_time: String,
    uptime_secs: i64,
}

async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let items = state.inventory.read().await.len();
    let now = Utc::now();

    Json(HealthResponse {
        status: "ok",
        items,
        server_time: now.to_rfc3339(),
        uptime_secs: (now - state.started_at).num_seconds(),
    })
}

// =============================================================================
// Inventory Endpoints
// =============================================================================

/// `GET /inventory`
async fn list_inventory(State(state): State<SharedState>) -> Json<Vec<Item>> {
    let inventory = state.inventory.read().await;
    Json(inventory.items().to_vec())
}

/// `GET /inventory/{search_value}` - by code if it looks like one, else by name.
async fn get_item(
    State(state): State<SharedState>,
    Path(search_value): Path<String>,
) -> ApiResult<Json<Item>> {
    debug!(search_value = %search_value, "Looking up item");

    let inventory = state.inventory.read().await;
    let item = inventory.get(&search_value)?;
    Ok(Json(item.clone()))
}

/// `POST /inventory/addItem`
async fn create_item(
    State(state): State<SharedState>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> ApiResult<Json<Vec<Item>>> {
    let Json(item) = payload?;

    let mut inventory = state.inventory.write().await;
    inventory.insert(item)?;
    Ok(Json(inventory.items().to_vec()))
}

/// `POST /inventory/addItems`
async fn create_items(
    State(state): State<SharedState>,
    payload: Result<Json<Vec<NewItem>>, JsonRejection>,
) -> ApiResult<Json<Vec<Item>>> {
    let Json(items) = payload?;

    let mut inventory = state.inventory.write().await;
    inventory.insert_batch(items)?;
    Ok(Json(inventory.items().to_vec()))
}

/// `POST /inventory/upsertItem`
async fn upsert_item(
    State(state): State<SharedState>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> ApiResult<Json<Vec<Item>>> {
    let Json(item) = payload?;

    let mut inventory = state.inventory.write().await;
    let outcome = inventory.upsert_by_name(item)?;
    debug!(?outcome, "Upsert finished");
    Ok(Json(inventory.items().to_vec()))
}

/// `POST /inventory/increaseQuantities`
async fn increase_quantities(
    State(state): State<SharedState>,
    payload: Result<Json<Vec<QuantityIncrease>>, JsonRejection>,
) -> ApiResult<Json<Vec<Item>>> {
    let Json(requests) = payload?;

    let mut inventory = state.inventory.write().await;
    inventory.increase_quantities(&requests)?;
    Ok(Json(inventory.items().to_vec()))
}

/// `PUT /inventory/{code}`
async fn update_item_info(
    State(state): State<SharedState>,
    Path(code): Path<String>,
    payload: Result<Json<ItemInfoUpdate>, JsonRejection>,
) -> ApiResult<Json<Vec<Item>>> {
    let Json(update) = payload?;

    let mut inventory = state.inventory.write().await;
    inventory.update_item_info(&code, update)?;
    Ok(Json(inventory.items().to_vec()))
}

/// `DELETE /inventory/{code}`
async fn delete_item(
    State(state): State<SharedState>,
    Path(code): Path<String>,
) -> ApiResult<Json<Vec<Item>>> {
    let mut inventory = state.inventory.write().await;

    if !inventory.delete_by_code(&code) {
        return Err(CoreError::ItemNotFound(code).into());
    }

    Ok(Json(inventory.items().to_vec()))
}

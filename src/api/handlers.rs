//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use tracing::{debug, warn};

use crate::{
    models::{FoodCategory, GroceryItem, ItemUpdate},
    state::AppState,
};
use super::responses::{
    AddItemRequest, ApiError, CategoryInfo, CategoryItemsResponse, GroupedListResponse,
    HealthResponse, ItemResponse, StatusResponse, UpdateItemRequest,
};

/// Handle POST /items - Add an item to the end of the list
pub async fn add_item_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AddItemRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, ApiError> {
    let Json(request) = body.inspect_err(|e| warn!("Unreadable new item body: {}", e))?;
    let category = request.category()?;

    let (item, summary) = state
        .add_item(&request.name, category, request.quantity, request.unit.as_deref())
        .inspect_err(|e| warn!("Rejected new item: {}", e))?;

    Ok(Json(ItemResponse::changed(format!("Added {}", item.name), item, summary)))
}

/// Handle DELETE /items/:id - Remove an item
pub async fn remove_item_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>, ApiError> {
    let response = match state.remove_item(&id)? {
        (Some(item), summary) => ItemResponse::changed(format!("Removed {}", item.name), item, summary),
        (None, summary) => ItemResponse::unchanged(format!("No item with id {}", id), summary),
    };
    Ok(Json(response))
}

/// Handle POST /items/:id/toggle - Flip an item's checked flag
pub async fn toggle_item_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>, ApiError> {
    let response = match state.toggle_item(&id)? {
        (Some(item), summary) => {
            let message = if item.is_checked {
                format!("Checked {}", item.name)
            } else {
                format!("Unchecked {}", item.name)
            };
            ItemResponse::changed(message, item, summary)
        }
        (None, summary) => ItemResponse::unchanged(format!("No item with id {}", id), summary),
    };
    Ok(Json(response))
}

/// Handle PATCH /items/:id - Merge a partial update into an item
pub async fn update_item_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, ApiError> {
    let Json(request) = body.inspect_err(|e| warn!("Unreadable update body for {}: {}", id, e))?;
    let update = ItemUpdate::try_from(request)?;

    let updated = state
        .update_item(&id, update)
        .inspect_err(|e| warn!("Rejected update for {}: {}", id, e))?;

    let response = match updated {
        (Some(item), summary) => ItemResponse::changed(format!("Updated {}", item.name), item, summary),
        (None, summary) => ItemResponse::unchanged(format!("No item with id {}", id), summary),
    };
    Ok(Json(response))
}

/// Handle GET /items - Full collection in insertion order
pub async fn list_items_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GroceryItem>>, ApiError> {
    Ok(Json(state.items()?))
}

/// Handle GET /categories - All categories in display order
pub async fn categories_handler(State(state): State<Arc<AppState>>) -> Json<Vec<CategoryInfo>> {
    Json(state.categories().iter().copied().map(CategoryInfo::from).collect())
}

/// Handle GET /categories/:category/items - Items of one category
pub async fn category_items_handler(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<CategoryItemsResponse>, ApiError> {
    let category: FoodCategory = category.parse()?;
    let items = state.items_by_category(category)?;
    debug!("{} items in {}", items.len(), category);

    Ok(Json(CategoryItemsResponse {
        category,
        label: category.label().to_string(),
        items,
    }))
}

/// Handle GET /list - Items grouped into non-empty category sections
pub async fn grouped_list_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GroupedListResponse>, ApiError> {
    let (sections, summary) = state.grouped()?;
    Ok(Json(GroupedListResponse::new(sections, summary)))
}

/// Handle GET /status - Return list counts and server status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, ApiError> {
    let summary = state.summary()?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        summary,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

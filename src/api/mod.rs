//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/items", get(list_items_handler).post(add_item_handler))
        .route("/items/:id", patch(update_item_handler).delete(remove_item_handler))
        .route("/items/:id/toggle", post(toggle_item_handler))
        .route("/categories", get(categories_handler))
        .route("/categories/:category/items", get(category_items_handler))
        .route("/list", get(grouped_list_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

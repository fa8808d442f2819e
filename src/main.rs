//! Grocery List - A state-managed HTTP server for a categorized grocery list
//!
//! This is the main entry point for the grocery-list application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use grocery_list::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::change_watcher_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("grocery_list={},tower_http=info", config.log_level()))
        .init();

    info!("Starting grocery-list server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, channel_capacity={}",
          config.host, config.port, config.channel_capacity);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), config.channel_capacity));

    // Follow list changes in the background
    tokio::spawn(change_watcher_task(state.subscribe()));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /items                      - All items in insertion order");
    info!("  POST   /items                      - Add an item");
    info!("  PATCH  /items/:id                  - Update an item");
    info!("  DELETE /items/:id                  - Remove an item");
    info!("  POST   /items/:id/toggle           - Check or uncheck an item");
    info!("  GET    /categories                 - Categories in display order");
    info!("  GET    /categories/:category/items - Items in one category");
    info!("  GET    /list                       - Items grouped by category");
    info!("  GET    /status                     - List counts and server status");
    info!("  GET    /health                     - Health check");

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

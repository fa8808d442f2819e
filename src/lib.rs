//! Grocery List - A state-managed HTTP server for a categorized grocery list
//!
//! This library holds the in-memory grocery list, its category-grouped views,
//! and the HTTP API a presentation client drives it through.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::GroceryError;
pub use models::{FoodCategory, GroceryItem, ItemUpdate};
pub use state::{AppState, GroceryList};
pub use utils::signals::shutdown_signal;

//! State management module
//!
//! The grocery list itself, its change notifications, and the shared owner
//! that serializes access to it.

pub mod app_state;
pub mod grocery_list;
pub mod list_change;

// Re-export main types
pub use app_state::AppState;
pub use grocery_list::GroceryList;
pub use list_change::{ChangeKind, ListChange};

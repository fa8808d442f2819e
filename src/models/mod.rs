//! Data model
//!
//! Grocery items, the fixed food category set, and the derived views the
//! presentation layer renders from.

pub mod category;
pub mod item;
pub mod view;

pub use category::FoodCategory;
pub use item::{GroceryItem, ItemUpdate};
pub use view::{CategorySection, ListSummary};

//! Derived views over the item collection

use serde::{Deserialize, Serialize};

use super::{FoodCategory, GroceryItem};

/// A non-empty category section of the grouped list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySection {
    pub category: FoodCategory,
    pub label: String,
    pub items: Vec<GroceryItem>,
}

/// Item counts for headers and status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    pub total: usize,
    pub checked: usize,
    pub remaining: usize,
}

impl ListSummary {
    pub fn from_items(items: &[GroceryItem]) -> Self {
        let checked = items.iter().filter(|item| item.is_checked).count();
        Self {
            total: items.len(),
            checked,
            remaining: items.len() - checked,
        }
    }
}

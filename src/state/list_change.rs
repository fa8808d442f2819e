//! Change notifications published after each list mutation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::GroceryItem;

/// Which operation changed the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Toggled,
    Updated,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::Toggled => "toggled",
            ChangeKind::Updated => "updated",
        }
    }
}

/// A committed change plus the list as it stands afterwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListChange {
    pub kind: ChangeKind,
    /// The item after the change (before it, for removals)
    pub item: GroceryItem,
    /// Full collection in insertion order
    pub items: Vec<GroceryItem>,
    pub timestamp: DateTime<Utc>,
}

impl ListChange {
    pub fn new(kind: ChangeKind, item: GroceryItem, items: Vec<GroceryItem>) -> Self {
        Self {
            kind,
            item,
            items,
            timestamp: Utc::now(),
        }
    }
}

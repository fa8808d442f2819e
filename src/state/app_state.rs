//! Shared application state
//!
//! `AppState` is the single owner of the grocery list for the running
//! process. Handlers and background tasks go through it for every read and
//! write; each effective mutation is broadcast to subscribers as a
//! [`ListChange`].

use std::{
    sync::{Mutex, MutexGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use tracing::{debug, info};

use super::{ChangeKind, GroceryList, ListChange};
use crate::{
    error::{GroceryError, Result},
    models::{CategorySection, FoodCategory, GroceryItem, ItemUpdate, ListSummary},
};

/// Main application state holding the grocery list and its change channel
#[derive(Debug)]
pub struct AppState {
    /// The authoritative item collection
    list: Mutex<GroceryList>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<(String, DateTime<Utc>)>>,
    /// Channel for list change notifications
    pub change_tx: broadcast::Sender<ListChange>,
}

impl AppState {
    /// Create state around an empty list that assigns UUIDs
    pub fn new(port: u16, host: String, channel_capacity: usize) -> Self {
        Self::with_list(GroceryList::new(), port, host, channel_capacity)
    }

    /// Create state around an existing list
    pub fn with_list(list: GroceryList, port: u16, host: String, channel_capacity: usize) -> Self {
        let (change_tx, _) = broadcast::channel(channel_capacity.max(1));

        Self {
            list: Mutex::new(list),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            change_tx,
        }
    }

    /// Subscribe to list change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<ListChange> {
        self.change_tx.subscribe()
    }

    /// Add an item to the end of the list.
    ///
    /// Returns the new item with the list counts taken under the same lock.
    pub fn add_item(
        &self,
        name: &str,
        category: FoodCategory,
        quantity: f64,
        unit: Option<&str>,
    ) -> Result<(GroceryItem, ListSummary)> {
        let mut list = self.lock_list()?;
        let item = list.add(name, category, quantity, unit)?;
        info!("Added '{}' ({}) to {}", item.name, item.display_quantity(), item.category);
        let summary = self.commit(list, ChangeKind::Added, item.clone());
        Ok((item, summary))
    }

    /// Remove an item; `None` if no item has that id
    pub fn remove_item(&self, id: &str) -> Result<(Option<GroceryItem>, ListSummary)> {
        let mut list = self.lock_list()?;
        let Some(item) = list.remove(id) else {
            return Ok((None, list.summary()));
        };
        info!("Removed '{}' from {}", item.name, item.category);
        let summary = self.commit(list, ChangeKind::Removed, item.clone());
        Ok((Some(item), summary))
    }

    /// Flip an item's checked flag; `None` if no item has that id
    pub fn toggle_item(&self, id: &str) -> Result<(Option<GroceryItem>, ListSummary)> {
        let mut list = self.lock_list()?;
        let Some(item) = list.toggle(id) else {
            return Ok((None, list.summary()));
        };
        info!("Item '{}' checked: {}", item.name, item.is_checked);
        let summary = self.commit(list, ChangeKind::Toggled, item.clone());
        Ok((Some(item), summary))
    }

    /// Merge a partial update into an item; `None` if no item has that id.
    ///
    /// Updates that leave the item as it was are not broadcast.
    pub fn update_item(
        &self,
        id: &str,
        update: ItemUpdate,
    ) -> Result<(Option<GroceryItem>, ListSummary)> {
        let mut list = self.lock_list()?;
        let before = list.get(id).cloned();
        let Some(item) = list.update(id, update)? else {
            return Ok((None, list.summary()));
        };

        if before.as_ref() == Some(&item) {
            debug!("Update left item {} unchanged", id);
            return Ok((Some(item), list.summary()));
        }

        info!("Updated '{}' in {}", item.name, item.category);
        let summary = self.commit(list, ChangeKind::Updated, item.clone());
        Ok((Some(item), summary))
    }

    /// Items in one category, in insertion order
    pub fn items_by_category(&self, category: FoodCategory) -> Result<Vec<GroceryItem>> {
        Ok(self.lock_list()?.items_by_category(category))
    }

    /// All categories in display order
    pub fn categories(&self) -> &'static [FoodCategory] {
        &FoodCategory::ALL
    }

    /// Snapshot of the whole collection
    pub fn items(&self) -> Result<Vec<GroceryItem>> {
        Ok(self.lock_list()?.items().to_vec())
    }

    /// Look up a single item
    pub fn get_item(&self, id: &str) -> Result<Option<GroceryItem>> {
        Ok(self.lock_list()?.get(id).cloned())
    }

    /// Grouped sections and counts, taken under one lock
    pub fn grouped(&self) -> Result<(Vec<CategorySection>, ListSummary)> {
        let list = self.lock_list()?;
        Ok((list.sections(), list.summary()))
    }

    pub fn summary(&self) -> Result<ListSummary> {
        Ok(self.lock_list()?.summary())
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        match self.last_action.lock().ok().and_then(|last| last.clone()) {
            Some((action, time)) => (Some(action), Some(time)),
            None => (None, None),
        }
    }

    fn lock_list(&self) -> Result<MutexGuard<'_, GroceryList>> {
        self.list
            .lock()
            .map_err(|e| GroceryError::StateUnavailable(e.to_string()))
    }

    /// Record the action and notify subscribers, releasing the list lock first.
    ///
    /// Returns the counts as of this change.
    fn commit(
        &self,
        list: MutexGuard<'_, GroceryList>,
        kind: ChangeKind,
        item: GroceryItem,
    ) -> ListSummary {
        let items = list.items().to_vec();
        let summary = list.summary();
        drop(list);

        let change = ListChange::new(kind, item, items);
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some((kind.as_str().to_string(), change.timestamp));
        }

        // No receivers is normal when nothing is watching
        if let Err(e) = self.change_tx.send(change) {
            debug!("List change not delivered: {}", e);
        }

        summary
    }
}

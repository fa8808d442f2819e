//! List change watcher background task

use tokio::sync::broadcast::{error::RecvError, Receiver};
use tracing::{debug, info, warn};

use crate::{
    models::FoodCategory,
    state::ListChange,
};

/// Background task that follows list changes and logs the regrouped list.
///
/// Returns the number of changes seen once every sender is gone.
pub async fn change_watcher_task(mut change_rx: Receiver<ListChange>) -> u64 {
    info!("Starting list change watcher task");

    let mut seen = 0;
    loop {
        match change_rx.recv().await {
            Ok(change) => {
                seen += 1;
                info!(
                    "List {} '{}' ({}): {}",
                    change.kind.as_str(),
                    change.item.name,
                    change.item.id,
                    describe_sections(&change)
                );
            }
            Err(RecvError::Lagged(skipped)) => {
                // The next change carries a full snapshot, so nothing is lost
                warn!("Change watcher lagged, skipped {} notifications", skipped);
            }
            Err(RecvError::Closed) => {
                debug!("Change channel closed after {} changes", seen);
                break;
            }
        }
    }

    seen
}

/// One-line summary of the snapshot, e.g. `dairy=2, grains=1`
pub fn describe_sections(change: &ListChange) -> String {
    let counts: Vec<String> = FoodCategory::ALL
        .iter()
        .filter_map(|&category| {
            let count = change
                .items
                .iter()
                .filter(|item| item.category == category)
                .count();
            (count > 0).then(|| format!("{}={}", category, count))
        })
        .collect();

    if counts.is_empty() {
        "empty".to_string()
    } else {
        counts.join(", ")
    }
}

//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod change_watcher;

// Re-export main functions
pub use change_watcher::change_watcher_task;

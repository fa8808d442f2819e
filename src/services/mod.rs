//! External collaborator module
//!
//! This module contains the identifier sources new items draw their ids from.

pub mod ids;

// Re-export main types
pub use ids::{IdSource, SequentialIds, UuidSource};

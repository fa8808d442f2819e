//! Error types for list operations

use thiserror::Error;

/// Errors produced by the grocery list manager.
///
/// A reference to an id that is not in the list is never an error; those
/// calls are no-ops and report `None` instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroceryError {
    /// Item name is empty after trimming.
    #[error("Item name must not be empty")]
    EmptyName,
    /// Quantity is not a finite number greater than zero.
    #[error("Quantity must be greater than zero, got {0}")]
    InvalidQuantity(f64),
    /// Category label is not one of the known food categories.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    /// Request body could not be read as the expected shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// The id source handed out an id that is already in use.
    #[error("Duplicate item id: {0}")]
    DuplicateId(String),
    /// Shared list state could not be locked.
    #[error("List state unavailable: {0}")]
    StateUnavailable(String),
}

pub type Result<T> = std::result::Result<T, GroceryError>;

//! Error handling for the Apiary Management Platform store core
//!
//! Every mutation returns an explicit result instead of silently
//! no-op-ing when an id does not match.

use thiserror::Error;

/// Store error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error("Invalid quantity for {field}: {value}")]
    InvalidQuantity { field: &'static str, value: u32 },

    #[error("Validation error: {0}")]
    ValidationError(&'static str),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

//! Typed failures the rest of the system matches on.
//!
//! Everything else travels as `anyhow::Error` with context attached; these
//! two variants are the ones callers need to distinguish (missing mutation
//! target vs. rejected input).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A mutation named an id that is not in the collection
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Input failed a domain rule before reaching the store
    #[error("validation failed: {0}")]
    Validation(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation(message.into())
    }
}

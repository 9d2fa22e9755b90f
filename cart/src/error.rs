//! Cart-specific error types
//!
//! The aggregator itself never fails; these cover the session store and
//! configuration boundaries only.

use thiserror::Error;
use shared::SharedError;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Session store operation failed: {operation} on {key}")]
    StoreError { operation: String, key: String },

    #[error("Session store is corrupted: {path}")]
    StoreCorrupted { path: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type CartResult<T> = Result<T, CartError>;

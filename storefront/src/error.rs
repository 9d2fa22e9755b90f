//! Storefront-specific error types

use thiserror::Error;
use cart::CartError;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Event script {path} is invalid: {message}")]
    EventScript { path: String, message: String },

    #[error("Cart component error")]
    CartError(#[from] CartError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type StorefrontResult<T> = Result<T, StorefrontError>;

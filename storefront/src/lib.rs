//! Storefront page adapters for the food gallery
//!
//! The gallery page routes user actions into the cart and keeps the
//! session handoff current; the order form page reads that handoff once.

pub mod error;
pub mod gallery;
pub mod order_form;
pub mod replay;
pub mod types;

// Re-export main types
pub use error::{StorefrontError, StorefrontResult};
pub use gallery::GalleryPage;
pub use order_form::OrderFormPage;
pub use replay::{ReplayReport, load_events, replay};
pub use types::*;

//! Shopping cart core for the food gallery
//!
//! Aggregates selected items into (item, vendor) lines, derives the
//! running total, and produces the display strings and the handoff
//! payload that the order form page reads from the session store.

pub mod config;
pub mod core;
pub mod error;
pub mod handoff;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::CartConfig;
pub use core::{
    CartAggregator, CartDisplay, CartLine, CartSnapshot, LineKey, OrderFormFields, RemoveOutcome, format_amount,
    parse_price,
};
pub use error::{CartError, CartResult};
pub use handoff::HandoffPayload;
pub use services::{FileSessionStore, MemorySessionStore};
pub use traits::SessionStore;

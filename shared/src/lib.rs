//! Shared types for the food gallery storefront
//!
//! Contains only what both the cart core and the page adapters need:
//! page and session identifiers, the shared error type and logging setup.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;

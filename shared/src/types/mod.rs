//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use uuid::Uuid;

/// Global page ID singleton - set once at startup
static PAGE_ID: OnceLock<PageId> = OnceLock::new();

/// Page identifier for the component currently driving the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageId {
    /// The gallery page that builds the cart
    Gallery,
    /// The order form page that consumes the handoff
    OrderForm,
}

impl PageId {
    /// Initialize the global page ID for the gallery page
    pub fn init_gallery() -> &'static PageId {
        PAGE_ID.get_or_init(|| PageId::Gallery)
    }

    /// Initialize the global page ID for the order form page
    pub fn init_order_form() -> &'static PageId {
        PAGE_ID.get_or_init(|| PageId::OrderForm)
    }

    /// Get the global page ID, falling back to the gallery when uninitialized
    ///
    /// Library code logs through this, so it must not panic in tests that
    /// never call an `init_*` function.
    pub fn current() -> &'static PageId {
        PAGE_ID.get().unwrap_or(&PageId::Gallery)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageId::Gallery => write!(f, "gallery"),
            PageId::OrderForm => write!(f, "order_form"),
        }
    }
}

impl std::str::FromStr for PageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gallery" => Ok(PageId::Gallery),
            "order_form" | "form" => Ok(PageId::OrderForm),
            _ => Err(format!("Unknown page: {s}")),
        }
    }
}

/// Unique identifier for one browsing session
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Page-level types shared by the gallery and the order form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::SessionId;

/// A gallery entry as supplied by the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub name: String,
    pub vendor: String,
    /// Free-form vendor text such as "Price: 13,000"
    pub price_text: String,
}

impl GalleryItem {
    pub fn new(name: impl Into<String>, vendor: impl Into<String>, price_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vendor: vendor.into(),
            price_text: price_text.into(),
        }
    }
}

/// One user action on the gallery page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PageEvent {
    /// "Add to cart" clicked, with whatever was typed for the chef
    Add {
        #[serde(flatten)]
        item: GalleryItem,
        #[serde(default)]
        note: Option<String>,
    },
    /// One unit taken back out of the cart
    Remove { name: String, vendor: String },
    /// Cart emptied
    Clear,
    /// Order button clicked
    Checkout,
}

/// Where the page goes after checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub target: String,
    pub session_id: SessionId,
    pub at: DateTime<Utc>,
}

//! Cart line types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a cart line: one item from one vendor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub item_name: String,
    pub vendor_name: String,
}

impl LineKey {
    /// Build a key from raw names, trimming surrounding whitespace
    pub fn new(item_name: &str, vendor_name: &str) -> Self {
        Self {
            item_name: item_name.trim().to_string(),
            vendor_name: vendor_name.trim().to_string(),
        }
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.item_name, self.vendor_name)
    }
}

/// One aggregated cart entry for a unique (item, vendor) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_name: String,
    pub vendor_name: String,
    pub unit_price: u64,
    /// Always at least 1 while the line is in the cart
    pub quantity: u32,
    /// Oldest first
    pub notes: Vec<String>,
}

impl CartLine {
    pub(crate) fn new(key: LineKey, unit_price: u64) -> Self {
        Self {
            item_name: key.item_name,
            vendor_name: key.vendor_name,
            unit_price,
            quantity: 1,
            notes: Vec::new(),
        }
    }

    pub fn matches(&self, key: &LineKey) -> bool {
        self.item_name == key.item_name && self.vendor_name == key.vendor_name
    }

    pub fn key(&self) -> LineKey {
        LineKey {
            item_name: self.item_name.clone(),
            vendor_name: self.vendor_name.clone(),
        }
    }

    /// Price of every unit on this line
    pub fn line_total(&self) -> u128 {
        u128::from(self.unit_price) * u128::from(self.quantity)
    }

    /// Display label: `"Name *qty"` when more than one unit, else the name
    pub fn label(&self) -> String {
        if self.quantity > 1 {
            format!("{} *{}", self.item_name, self.quantity)
        } else {
            self.item_name.clone()
        }
    }
}

//! Cart aggregation
//!
//! Owns the ordered line set for one page session. Repeated additions of
//! the same (item, vendor) pair merge into a single line, and the total is
//! always derived from the lines rather than tracked alongside them.

use serde::{Deserialize, Serialize};
use shared::{PageId, page_debug};

use super::display::{self, CartDisplay, OrderFormFields};
use super::line::{CartLine, LineKey};
use super::price::parse_price;
use crate::config::CartConfig;
use crate::handoff::HandoffPayload;

/// What a removal did to the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// One unit taken off a line that is still present
    Decremented { remaining: u32 },
    /// The last unit went, so the line is gone
    Removed,
    /// No line matched; the cart is unchanged
    NotFound,
}

/// Serializable copy of the cart state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total: u128,
}

/// The shopping cart for one page session
#[derive(Debug, Clone, Default)]
pub struct CartAggregator {
    /// Lines in first-add order
    lines: Vec<CartLine>,

    config: CartConfig,
}

impl CartAggregator {
    /// Create an empty cart with default formatting
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart with explicit formatting settings
    pub fn with_config(config: CartConfig) -> Self {
        Self {
            lines: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Add one unit of an item
    ///
    /// Merges into the existing line for the same trimmed (item, vendor)
    /// pair, keeping that line's original unit price. A non-empty note is
    /// folded onto one line and appended to the line's notes.
    pub fn add_item(&mut self, item_name: &str, vendor_name: &str, unit_price: u64, note: Option<&str>) {
        let key = LineKey::new(item_name, vendor_name);
        let note = note
            .map(|n| n.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|n| !n.is_empty());

        match self.position(&key) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
                line.notes.extend(note);
                page_debug!(PageId::current(), "🛒 {} now x{}", key, line.quantity);
            }
            None => {
                let mut line = CartLine::new(key, unit_price);
                line.notes.extend(note);
                page_debug!(PageId::current(), "🛒 Added {} @ {}", line.item_name, unit_price);
                self.lines.push(line);
            }
        }
    }

    /// Add one unit using vendor-supplied price text
    ///
    /// Unparseable price text counts as a price of 0.
    pub fn add_item_text(&mut self, item_name: &str, vendor_name: &str, price_text: &str, note: Option<&str>) {
        self.add_item(item_name, vendor_name, parse_price(price_text), note);
    }

    /// Remove one unit of an item
    ///
    /// Pops the most recently added note, and drops the line once its
    /// quantity reaches zero. Removing an item that is not in the cart is
    /// a no-op.
    pub fn remove_item(&mut self, item_name: &str, vendor_name: &str) -> RemoveOutcome {
        let key = LineKey::new(item_name, vendor_name);

        let Some(index) = self.position(&key) else {
            page_debug!(PageId::current(), "🛒 Ignoring removal of {}: not in cart", key);
            return RemoveOutcome::NotFound;
        };

        let line = &mut self.lines[index];
        line.notes.pop();
        line.quantity -= 1;

        if line.quantity == 0 {
            self.lines.remove(index);
            page_debug!(PageId::current(), "🛒 Removed {}", key);
            RemoveOutcome::Removed
        } else {
            let remaining = line.quantity;
            page_debug!(PageId::current(), "🛒 {} now x{}", key, remaining);
            RemoveOutcome::Decremented { remaining }
        }
    }

    /// Empty the cart
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of unit price times quantity over every line
    ///
    /// Widened to `u128`: a line total is below 2^96, so the exact sum of
    /// any cart that fits in memory cannot overflow.
    pub fn total(&self) -> u128 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, item_name: &str, vendor_name: &str) -> Option<&CartLine> {
        let key = LineKey::new(item_name, vendor_name);
        self.lines.iter().find(|line| line.matches(&key))
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of units across all lines
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn formatted_total(&self) -> String {
        display::format_amount(self.total(), &self.config.locale)
    }

    /// Strings for the gallery's order panel
    pub fn serialize_for_display(&self) -> CartDisplay {
        CartDisplay {
            items: display::item_labels(&self.lines),
            vendors: display::unique_vendors(&self.lines),
            total: self.formatted_total(),
        }
    }

    /// Payload handed to the order form through the session store
    ///
    /// The vendor list is deduplicated, exactly as in the display.
    pub fn serialize_for_handoff(&self) -> HandoffPayload {
        HandoffPayload {
            cart_items: display::item_labels(&self.lines),
            total_amount: self.formatted_total(),
            from: display::unique_vendors(&self.lines),
            user_inputs: display::flatten_notes(&self.lines, &self.config.notes_delimiter),
        }
    }

    /// Values for the order form's hidden inputs
    pub fn serialize_for_form(&self) -> OrderFormFields {
        OrderFormFields {
            cart_items: self
                .lines
                .iter()
                .map(display::summary_row)
                .collect::<Vec<_>>()
                .join("\n"),
            total: self.formatted_total(),
            from: display::unique_vendors(&self.lines),
        }
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            total: self.total(),
        }
    }

    fn position(&self, key: &LineKey) -> Option<usize> {
        self.lines.iter().position(|line| line.matches(key))
    }
}

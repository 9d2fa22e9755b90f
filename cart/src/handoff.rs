//! Cart handoff between the gallery and the order form
//!
//! The only channel between the two pages is the session store, so the
//! payload is four plain text fields under fixed keys.

use serde::{Deserialize, Serialize};
use shared::{PageId, page_debug};

use crate::error::CartResult;
use crate::traits::SessionStore;

/// Comma-joined item labels, `"Name *qty"` for quantities above one
pub const CART_ITEMS_KEY: &str = "cartItems";
/// Total grouped for the configured locale
pub const TOTAL_AMOUNT_KEY: &str = "totalAmount";
/// Deduplicated vendor names
pub const FROM_KEY: &str = "from";
/// Delimiter-joined notes
pub const USER_INPUTS_KEY: &str = "userInputs";

/// Every key the handoff owns, in write order
pub const HANDOFF_KEYS: [&str; 4] = [CART_ITEMS_KEY, TOTAL_AMOUNT_KEY, FROM_KEY, USER_INPUTS_KEY];

/// Text fields written for the order form page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffPayload {
    pub cart_items: String,
    pub total_amount: String,
    pub from: String,
    pub user_inputs: String,
}

impl HandoffPayload {
    /// Key/value pairs in write order
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            (CART_ITEMS_KEY, self.cart_items.as_str()),
            (TOTAL_AMOUNT_KEY, self.total_amount.as_str()),
            (FROM_KEY, self.from.as_str()),
            (USER_INPUTS_KEY, self.user_inputs.as_str()),
        ]
    }

    /// Write all four keys, overwriting any previous handoff
    pub fn write_to<S: SessionStore + ?Sized>(&self, store: &mut S) -> CartResult<()> {
        for (key, value) in self.entries() {
            store.set(key, value)?;
        }
        page_debug!(PageId::current(), "📤 Handoff written: items='{}' total={}", self.cart_items, self.total_amount);
        Ok(())
    }

    /// Read the handoff back; absent keys read as empty text
    pub fn read_from<S: SessionStore + ?Sized>(store: &S) -> CartResult<Self> {
        let read = |key: &str| -> CartResult<String> { Ok(store.get(key)?.unwrap_or_default()) };

        let payload = Self {
            cart_items: read(CART_ITEMS_KEY)?,
            total_amount: read(TOTAL_AMOUNT_KEY)?,
            from: read(FROM_KEY)?,
            user_inputs: read(USER_INPUTS_KEY)?,
        };
        page_debug!(PageId::current(), "📥 Handoff read: items='{}' total={}", payload.cart_items, payload.total_amount);
        Ok(payload)
    }

    /// Remove all four keys from the store
    pub fn clear_from<S: SessionStore + ?Sized>(store: &mut S) -> CartResult<()> {
        for key in HANDOFF_KEYS {
            store.remove(key)?;
        }
        Ok(())
    }

    /// True when no cart items were handed off
    pub fn is_empty(&self) -> bool {
        self.cart_items.is_empty()
    }

    /// Notes split back into entries
    pub fn notes(&self, delimiter: &str) -> Vec<String> {
        if self.user_inputs.is_empty() {
            return Vec::new();
        }
        self.user_inputs.split(delimiter).map(str::to_string).collect()
    }
}

//! Order form page adapter
//!
//! Reads the cart handoff once when the page loads and renders it as the
//! pre-filled order summary.

use cart::{CartConfig, HandoffPayload, SessionStore};
use shared::{PageId, page_info};

use crate::error::StorefrontResult;

/// Order form populated from the session handoff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFormPage {
    payload: HandoffPayload,
    notes: Vec<String>,
}

impl OrderFormPage {
    /// Read the handoff keys from the session store
    pub fn load<S: SessionStore + ?Sized>(store: &S, config: &CartConfig) -> StorefrontResult<Self> {
        let payload = HandoffPayload::read_from(store)?;
        let notes = payload.notes(&config.notes_delimiter);

        page_info!(
            PageId::current(),
            "📝 Order form loaded: '{}' from '{}', total {}",
            payload.cart_items,
            payload.from,
            payload.total_amount
        );
        Ok(Self { payload, notes })
    }

    pub fn payload(&self) -> &HandoffPayload {
        &self.payload
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Plain-text order summary
    pub fn render(&self) -> String {
        if self.is_empty() {
            return "Your cart is empty.".to_string();
        }

        let mut lines = vec![
            format!("Ordered: {}", self.payload.cart_items),
            format!("From: {}", self.payload.from),
            format!("Total: {}", self.payload.total_amount),
        ];
        if !self.notes.is_empty() {
            lines.push("Notes for the chef:".to_string());
            lines.extend(self.notes.iter().map(|note| format!("  - {note}")));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart::MemorySessionStore;

    #[test]
    fn test_render_full_order() {
        let mut store = MemorySessionStore::new();
        HandoffPayload {
            cart_items: "Burger *2, Pizza".to_string(),
            total_amount: "18,000".to_string(),
            from: "Joe's, Ann's".to_string(),
            user_inputs: "no onions\nwell done".to_string(),
        }
        .write_to(&mut store)
        .unwrap();

        let form = OrderFormPage::load(&store, &CartConfig::default()).unwrap();
        assert_eq!(form.notes().to_vec(), vec!["no onions", "well done"]);
        assert_eq!(
            form.render(),
            "Ordered: Burger *2, Pizza\nFrom: Joe's, Ann's\nTotal: 18,000\nNotes for the chef:\n  - no onions\n  - well done"
        );
    }

    #[test]
    fn test_note_containing_commas_stays_whole() {
        let mut store = MemorySessionStore::new();
        let mut cart = cart::CartAggregator::new();
        cart.add_item("Burger", "Joe's", 5000, Some("spicy, please"));
        cart.add_item("Burger", "Joe's", 5000, Some("no pickles, no onions"));
        cart.serialize_for_handoff().write_to(&mut store).unwrap();

        let form = OrderFormPage::load(&store, &CartConfig::default()).unwrap();
        assert_eq!(form.notes().to_vec(), vec!["spicy, please", "no pickles, no onions"]);
        assert!(form.render().ends_with("  - spicy, please\n  - no pickles, no onions"));
    }

    #[test]
    fn test_render_without_handoff() {
        let form = OrderFormPage::load(&MemorySessionStore::new(), &CartConfig::default()).unwrap();
        assert!(form.is_empty());
        assert_eq!(form.render(), "Your cart is empty.");
    }
}

//! Gallery page adapter
//!
//! Thin handlers between the rendering layer and the cart: each user
//! action becomes one call into the aggregator, followed by a rewrite of
//! the handoff keys so the session store always mirrors the cart.

use cart::{CartAggregator, CartConfig, CartDisplay, OrderFormFields, RemoveOutcome, SessionStore};
use chrono::Utc;
use shared::{PageId, SessionId, page_debug, page_error, page_info, page_warn};

use crate::error::StorefrontResult;
use crate::types::{GalleryItem, Navigation, PageEvent};

/// Gallery page state for one session
pub struct GalleryPage<S: SessionStore> {
    cart: CartAggregator,
    store: S,
    session_id: SessionId,
}

impl<S: SessionStore> GalleryPage<S> {
    /// Load the page with an empty cart
    pub fn new(store: S, config: CartConfig) -> Self {
        let session_id = SessionId::new();
        page_debug!(PageId::current(), "🖼️ Gallery loaded for session {}", session_id);
        Self {
            cart: CartAggregator::with_config(config),
            store,
            session_id,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn cart(&self) -> &CartAggregator {
        &self.cart
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// "Add to cart" handler
    pub fn add_to_cart(&mut self, item: &GalleryItem, note: Option<&str>) -> StorefrontResult<CartDisplay> {
        self.cart.add_item_text(&item.name, &item.vendor, &item.price_text, note);
        self.sync()?;
        Ok(self.cart.serialize_for_display())
    }

    /// Take one unit of an item back out of the cart
    pub fn remove_from_cart(&mut self, name: &str, vendor: &str) -> StorefrontResult<RemoveOutcome> {
        let outcome = self.cart.remove_item(name, vendor);
        if outcome != RemoveOutcome::NotFound {
            self.sync()?;
        }
        Ok(outcome)
    }

    pub fn clear_cart(&mut self) -> StorefrontResult<()> {
        self.cart.clear();
        self.sync()
    }

    /// Order button handler: write the handoff and leave for the form page
    pub fn checkout(&mut self) -> StorefrontResult<Navigation> {
        if self.cart.is_empty() {
            page_warn!(PageId::current(), "⚠️ Checkout with an empty cart");
        }

        self.sync()?;

        let navigation = Navigation {
            target: self.cart.config().form_page.clone(),
            session_id: self.session_id.clone(),
            at: Utc::now(),
        };
        page_info!(
            PageId::current(),
            "🧾 Checkout: {} items, total {} → {}",
            self.cart.item_count(),
            self.cart.formatted_total(),
            navigation.target
        );
        Ok(navigation)
    }

    /// Apply one scripted user action
    pub fn handle(&mut self, event: &PageEvent) -> StorefrontResult<Option<Navigation>> {
        match event {
            PageEvent::Add { item, note } => {
                self.add_to_cart(item, note.as_deref())?;
            }
            PageEvent::Remove { name, vendor } => {
                self.remove_from_cart(name, vendor)?;
            }
            PageEvent::Clear => self.clear_cart()?,
            PageEvent::Checkout => return self.checkout().map(Some),
        }
        Ok(None)
    }

    pub fn display(&self) -> CartDisplay {
        self.cart.serialize_for_display()
    }

    pub fn form_fields(&self) -> OrderFormFields {
        self.cart.serialize_for_form()
    }

    fn sync(&mut self) -> StorefrontResult<()> {
        if let Err(e) = self.cart.serialize_for_handoff().write_to(&mut self.store) {
            page_error!(PageId::current(), "❌ Handoff write failed: {}", e);
            return Err(e.into());
        }
        Ok(())
    }
}

//! Trait definitions with mockall annotations for testing
//!
//! The session store is the only boundary the cart crosses, so it is the
//! only seam abstracted here.

use crate::error::CartResult;

/// String-keyed, string-valued store scoped to one browsing session
///
/// Shared by the gallery page, which writes the handoff keys, and the
/// order form page, which reads them once.
#[mockall::automock]
pub trait SessionStore {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> CartResult<Option<String>>;

    /// Write or overwrite a value
    fn set(&mut self, key: &str, value: &str) -> CartResult<()>;

    /// Remove a single key; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> CartResult<()>;

    /// Drop every key in the session
    fn clear(&mut self) -> CartResult<()>;
}

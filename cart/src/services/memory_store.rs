//! In-memory session store
//!
//! The tab-local store: lives exactly as long as the value that owns it.

use std::collections::HashMap;

use crate::error::CartResult;
use crate::traits::SessionStore;

/// Session store backed by a hash map
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> CartResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CartResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CartResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> CartResult<()> {
        self.entries.clear();
        Ok(())
    }
}

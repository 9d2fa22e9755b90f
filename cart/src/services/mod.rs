//! Service implementations
//!
//! Real implementations of the session store trait

pub mod file_store;
pub mod memory_store;

// Re-export service implementations
pub use file_store::FileSessionStore;
pub use memory_store::MemorySessionStore;

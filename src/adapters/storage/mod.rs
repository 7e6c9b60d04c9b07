//! Storage Adapters
//!
//! Implementations of the AssistantSessionStore port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - Keeps sessions in process memory
//!
//! ## Usage
//!
//! ```
//! use shop_assistant::adapters::storage::InMemorySessionStore;
//!
//! let store = InMemorySessionStore::new();
//! ```

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Session store implementations (in-memory)

pub mod storage;

pub use storage::InMemorySessionStore;

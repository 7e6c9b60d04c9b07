//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Session Ports
//!
//! - `AssistantSessionStore` - Per-conversation slot state, keyed by session

mod session_store;

pub use session_store::{AssistantSessionStore, SessionStoreError, SessionUpdate};

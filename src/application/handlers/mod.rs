//! Command and Query Handlers
//!
//! Each handler owns its dependencies as `Arc<dyn Port>` and exposes a
//! single async `handle` method.

pub mod assistant;

//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers and value objects shared by the
//! assistant domain and the layers around it.

mod ids;
mod timestamp;

pub use ids::SessionId;
pub use timestamp::Timestamp;

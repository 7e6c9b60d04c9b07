//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, timestamps)
//! - `assistant` - Conversational slot-filling shopping assistant

pub mod assistant;
pub mod foundation;

//! Shopping Assistant Command and Query Handlers
//!
//! CQRS handlers over the session store.
//!
//! ## Commands
//! - `StartSession` - Open a conversation with an all-null context
//! - `ProcessMessage` - Run one utterance and persist the merged slots
//! - `ResetContext` - Forget every slot of a session
//! - `EndSession` - Discard a session
//!
//! ## Queries
//! - `GetSessionContext` - Current slots and filter
//! - `ConfirmHandoff` - Shop link if a reply confirms the filter

mod confirm_handoff;
mod end_session;
mod get_session_context;
mod process_message;
mod reset_context;
mod start_session;

pub use confirm_handoff::{
    ConfirmHandoffError, ConfirmHandoffHandler, ConfirmHandoffQuery, ConfirmHandoffResult,
};
pub use end_session::{EndSessionCommand, EndSessionError, EndSessionHandler};
pub use get_session_context::{
    GetSessionContextError, GetSessionContextHandler, GetSessionContextQuery,
    GetSessionContextResult,
};
pub use process_message::{
    ProcessMessageCommand, ProcessMessageError, ProcessMessageHandler, ProcessMessageResult,
};
pub use reset_context::{ResetContextCommand, ResetContextError, ResetContextHandler};
pub use start_session::{
    StartSessionCommand, StartSessionError, StartSessionHandler, StartSessionResult,
};

//! Session Store Port - Interface for holding assistant sessions.
//!
//! Every conversation owns its own [`SessionContext`]; the store keeps
//! them apart by [`SessionId`]. Implementations live in process memory
//! only; nothing here defines a persisted format.

use async_trait::async_trait;

use crate::domain::assistant::SessionContext;
use crate::domain::foundation::SessionId;

/// Errors that can occur during session store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Session already exists: {0}")]
    AlreadyExists(SessionId),
}

/// In-place change applied to a stored session
pub type SessionUpdate<'a> = Box<dyn FnOnce(&mut SessionContext) + Send + 'a>;

/// Port for keeping per-conversation assistant state
#[async_trait]
pub trait AssistantSessionStore: Send + Sync {
    /// Insert a new session
    ///
    /// # Errors
    /// Returns `SessionStoreError::AlreadyExists` if the id is taken
    async fn create(&self, context: &SessionContext) -> Result<(), SessionStoreError>;

    /// Apply a change to a session and return the updated copy
    ///
    /// The change runs while the session is held exclusively, so two
    /// concurrent updates to one session never overwrite each other.
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if the session was never created
    /// or has been ended
    async fn update<'a>(
        &self,
        session_id: SessionId,
        apply: SessionUpdate<'a>,
    ) -> Result<SessionContext, SessionStoreError>;

    /// Load a copy of a session
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no session exists
    async fn load(&self, session_id: SessionId) -> Result<SessionContext, SessionStoreError>;

    /// Check if a session exists
    async fn exists(&self, session_id: SessionId) -> bool;

    /// Drop a session
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no session exists
    async fn delete(&self, session_id: SessionId) -> Result<(), SessionStoreError>;

    /// Number of live sessions
    async fn count(&self) -> usize;
}

//! ResetContextHandler - Forget every slot of a session

use std::sync::Arc;

use crate::domain::assistant::SessionContext;
use crate::domain::foundation::SessionId;
use crate::ports::{AssistantSessionStore, SessionStoreError};

/// Command to reset a session's slots
#[derive(Debug, Clone)]
pub struct ResetContextCommand {
    pub session_id: SessionId,
}

/// Error type for resetting context
#[derive(Debug, Clone)]
pub enum ResetContextError {
    /// Session not found
    NotFound(SessionId),
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for ResetContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetContextError::NotFound(id) => write!(f, "Assistant session not found: {}", id),
            ResetContextError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for ResetContextError {}

impl From<SessionStoreError> for ResetContextError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => ResetContextError::NotFound(id),
            other => ResetContextError::Storage(other.to_string()),
        }
    }
}

/// Handler for context resets (language change, panel reopened)
pub struct ResetContextHandler {
    store: Arc<dyn AssistantSessionStore>,
}

impl ResetContextHandler {
    pub fn new(store: Arc<dyn AssistantSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ResetContextCommand) -> Result<(), ResetContextError> {
        self.store
            .update(
                cmd.session_id,
                Box::new(|context: &mut SessionContext| context.reset()),
            )
            .await?;

        tracing::info!(session_id = %cmd.session_id, "Assistant context reset");
        Ok(())
    }
}

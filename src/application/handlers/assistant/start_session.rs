//! StartSessionHandler - Open a fresh assistant conversation

use std::sync::Arc;

use crate::domain::assistant::SessionContext;
use crate::domain::foundation::SessionId;
use crate::ports::{AssistantSessionStore, SessionStoreError};

/// Command to start an assistant session
#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand {
    /// Caller-chosen id; a random one is generated when absent
    pub session_id: Option<SessionId>,
}

/// Result of starting a session
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub context: SessionContext,
}

/// Error type for starting sessions
#[derive(Debug, Clone)]
pub enum StartSessionError {
    /// A session with this id is already open
    AlreadyExists(SessionId),
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for StartSessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartSessionError::AlreadyExists(id) => {
                write!(f, "Assistant session already exists: {}", id)
            }
            StartSessionError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for StartSessionError {}

impl From<SessionStoreError> for StartSessionError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::AlreadyExists(id) => StartSessionError::AlreadyExists(id),
            other => StartSessionError::Storage(other.to_string()),
        }
    }
}

/// Handler for starting assistant sessions
pub struct StartSessionHandler {
    store: Arc<dyn AssistantSessionStore>,
}

impl StartSessionHandler {
    pub fn new(store: Arc<dyn AssistantSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: StartSessionCommand,
    ) -> Result<StartSessionResult, StartSessionError> {
        // 1. Seed an all-null context
        let context = SessionContext::new(cmd.session_id.unwrap_or_default());

        // 2. Register it
        self.store.create(&context).await?;

        tracing::info!(session_id = %context.session_id, "Assistant session started");

        Ok(StartSessionResult { context })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;

    #[tokio::test]
    async fn test_start_session_creates_empty_context() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartSessionHandler::new(store.clone());

        let result = handler.handle(StartSessionCommand::default()).await.unwrap();

        assert!(result.context.slots.is_empty());
        assert_eq!(result.context.turn_count, 0);
        assert!(store.exists(result.context.session_id).await);
    }

    #[tokio::test]
    async fn test_start_session_uses_given_id() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartSessionHandler::new(store);
        let id = SessionId::new();

        let result = handler
            .handle(StartSessionCommand { session_id: Some(id) })
            .await
            .unwrap();

        assert_eq!(result.context.session_id, id);
    }

    #[tokio::test]
    async fn test_start_session_twice_fails() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartSessionHandler::new(store);
        let id = SessionId::new();

        handler
            .handle(StartSessionCommand { session_id: Some(id) })
            .await
            .unwrap();
        let result = handler
            .handle(StartSessionCommand { session_id: Some(id) })
            .await;

        assert!(matches!(result, Err(StartSessionError::AlreadyExists(_))));
    }
}

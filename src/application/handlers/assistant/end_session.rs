//! EndSessionHandler - Discard a session when the chat panel goes away

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::ports::{AssistantSessionStore, SessionStoreError};

/// Command to end a session
#[derive(Debug, Clone)]
pub struct EndSessionCommand {
    pub session_id: SessionId,
}

/// Error type for ending sessions
#[derive(Debug, Clone)]
pub enum EndSessionError {
    /// Session not found
    NotFound(SessionId),
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for EndSessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndSessionError::NotFound(id) => write!(f, "Assistant session not found: {}", id),
            EndSessionError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for EndSessionError {}

impl From<SessionStoreError> for EndSessionError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => EndSessionError::NotFound(id),
            other => EndSessionError::Storage(other.to_string()),
        }
    }
}

/// Handler for ending sessions
pub struct EndSessionHandler {
    store: Arc<dyn AssistantSessionStore>,
}

impl EndSessionHandler {
    pub fn new(store: Arc<dyn AssistantSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: EndSessionCommand) -> Result<(), EndSessionError> {
        let context = self.store.load(cmd.session_id).await?;
        self.store.delete(cmd.session_id).await?;

        tracing::info!(
            session_id = %cmd.session_id,
            turns = context.turn_count,
            active_secs = context.active_for().num_seconds(),
            "Assistant session ended"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;
    use crate::domain::assistant::SessionContext;

    #[tokio::test]
    async fn test_end_session_removes_it() {
        let store = Arc::new(InMemorySessionStore::new());
        let context = SessionContext::new(SessionId::new());
        store.create(&context).await.unwrap();

        let handler = EndSessionHandler::new(store.clone());
        handler
            .handle(EndSessionCommand {
                session_id: context.session_id,
            })
            .await
            .unwrap();

        assert!(!store.exists(context.session_id).await);
    }

    #[tokio::test]
    async fn test_end_unknown_session() {
        let handler = EndSessionHandler::new(Arc::new(InMemorySessionStore::new()));

        let result = handler
            .handle(EndSessionCommand {
                session_id: SessionId::new(),
            })
            .await;

        assert!(matches!(result, Err(EndSessionError::NotFound(_))));
    }
}

//! GetSessionContextHandler - Query the current slots of a session

use std::sync::Arc;

use crate::domain::assistant::{SearchFilter, SessionContext};
use crate::domain::foundation::SessionId;
use crate::ports::{AssistantSessionStore, SessionStoreError};

/// Query for a session's state
#[derive(Debug, Clone)]
pub struct GetSessionContextQuery {
    pub session_id: SessionId,
}

/// Result of the session query
#[derive(Debug, Clone)]
pub struct GetSessionContextResult {
    pub context: SessionContext,
    pub filter: SearchFilter,
}

/// Error type for the session query
#[derive(Debug, Clone)]
pub enum GetSessionContextError {
    /// Session not found
    NotFound(SessionId),
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for GetSessionContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetSessionContextError::NotFound(id) => {
                write!(f, "Assistant session not found: {}", id)
            }
            GetSessionContextError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for GetSessionContextError {}

impl From<SessionStoreError> for GetSessionContextError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => GetSessionContextError::NotFound(id),
            other => GetSessionContextError::Storage(other.to_string()),
        }
    }
}

/// Handler for session state queries
pub struct GetSessionContextHandler {
    store: Arc<dyn AssistantSessionStore>,
}

impl GetSessionContextHandler {
    pub fn new(store: Arc<dyn AssistantSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetSessionContextQuery,
    ) -> Result<GetSessionContextResult, GetSessionContextError> {
        let context = self.store.load(query.session_id).await?;
        let filter = context.filter();

        Ok(GetSessionContextResult { context, filter })
    }
}

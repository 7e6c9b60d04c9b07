//! In-Memory Session Store Adapter
//!
//! Holds assistant sessions in process memory for the lifetime of the
//! process. Each entry is an independent `SessionContext`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assistant::SessionContext;
use crate::domain::foundation::SessionId;
use crate::ports::{AssistantSessionStore, SessionStoreError, SessionUpdate};

/// In-memory storage for assistant sessions
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionContext>>>,
}

impl InMemorySessionStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Drop every session (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssistantSessionStore for InMemorySessionStore {
    async fn create(&self, context: &SessionContext) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&context.session_id) {
            return Err(SessionStoreError::AlreadyExists(context.session_id));
        }
        sessions.insert(context.session_id, context.clone());
        Ok(())
    }

    async fn update<'a>(
        &self,
        session_id: SessionId,
        apply: SessionUpdate<'a>,
    ) -> Result<SessionContext, SessionStoreError> {
        // Write guard is held across the change
        let mut sessions = self.sessions.write().await;
        let context = sessions
            .get_mut(&session_id)
            .ok_or(SessionStoreError::NotFound(session_id))?;

        apply(context);
        Ok(context.clone())
    }

    async fn load(&self, session_id: SessionId) -> Result<SessionContext, SessionStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&session_id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(session_id))
    }

    async fn exists(&self, session_id: SessionId) -> bool {
        self.sessions.read().await.contains_key(&session_id)
    }

    async fn delete(&self, session_id: SessionId) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .await
            .remove(&session_id)
            .map(|_| ())
            .ok_or(SessionStoreError::NotFound(session_id))
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

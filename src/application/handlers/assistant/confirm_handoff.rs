//! ConfirmHandoffHandler - Turn a shopper's "yes" into a shop link

use std::sync::Arc;

use crate::domain::assistant::{AssistantPipeline, ShopLink};
use crate::domain::foundation::SessionId;
use crate::ports::{AssistantSessionStore, SessionStoreError};

/// Query checking whether a reply confirms the current filter
#[derive(Debug, Clone)]
pub struct ConfirmHandoffQuery {
    pub session_id: SessionId,
    pub utterance: String,
}

/// Result of the handoff check
#[derive(Debug, Clone)]
pub struct ConfirmHandoffResult {
    /// `None` means the utterance should be processed as a normal turn
    pub link: Option<ShopLink>,
}

/// Error type for the handoff check
#[derive(Debug, Clone)]
pub enum ConfirmHandoffError {
    /// Session not found
    NotFound(SessionId),
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for ConfirmHandoffError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfirmHandoffError::NotFound(id) => write!(f, "Assistant session not found: {}", id),
            ConfirmHandoffError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for ConfirmHandoffError {}

impl From<SessionStoreError> for ConfirmHandoffError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => ConfirmHandoffError::NotFound(id),
            other => ConfirmHandoffError::Storage(other.to_string()),
        }
    }
}

/// Handler for handoff confirmation checks
pub struct ConfirmHandoffHandler {
    store: Arc<dyn AssistantSessionStore>,
    pipeline: Arc<AssistantPipeline>,
}

impl ConfirmHandoffHandler {
    pub fn new(store: Arc<dyn AssistantSessionStore>, pipeline: Arc<AssistantPipeline>) -> Self {
        Self { store, pipeline }
    }

    pub async fn handle(
        &self,
        query: ConfirmHandoffQuery,
    ) -> Result<ConfirmHandoffResult, ConfirmHandoffError> {
        let context = self.store.load(query.session_id).await?;
        let link = self.pipeline.handoff(&context, &query.utterance);

        Ok(ConfirmHandoffResult { link })
    }
}

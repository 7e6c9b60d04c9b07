//! ProcessMessageHandler - Run one shopper utterance through the assistant

use std::sync::Arc;

use crate::domain::assistant::{AssistantPipeline, AssistantReply, SessionContext};
use crate::domain::foundation::SessionId;
use crate::ports::{AssistantSessionStore, SessionStoreError};

/// Command to process a shopper message
#[derive(Debug, Clone)]
pub struct ProcessMessageCommand {
    pub session_id: SessionId,
    pub utterance: String,
}

/// Result of processing a message
#[derive(Debug, Clone)]
pub struct ProcessMessageResult {
    pub reply: AssistantReply,
    pub turn_count: u32,
}

/// Error type for processing messages
#[derive(Debug, Clone)]
pub enum ProcessMessageError {
    /// Session not found
    NotFound(SessionId),
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for ProcessMessageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessMessageError::NotFound(id) => write!(f, "Assistant session not found: {}", id),
            ProcessMessageError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for ProcessMessageError {}

impl From<SessionStoreError> for ProcessMessageError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => ProcessMessageError::NotFound(id),
            other => ProcessMessageError::Storage(other.to_string()),
        }
    }
}

/// Handler for shopper messages
pub struct ProcessMessageHandler {
    store: Arc<dyn AssistantSessionStore>,
    pipeline: Arc<AssistantPipeline>,
}

impl ProcessMessageHandler {
    pub fn new(store: Arc<dyn AssistantSessionStore>, pipeline: Arc<AssistantPipeline>) -> Self {
        Self { store, pipeline }
    }

    pub async fn handle(
        &self,
        cmd: ProcessMessageCommand,
    ) -> Result<ProcessMessageResult, ProcessMessageError> {
        let mut reply = None;

        // Classify, extract, merge and respond while the session is held
        let context = self
            .store
            .update(
                cmd.session_id,
                Box::new(|context: &mut SessionContext| {
                    reply = Some(self.pipeline.run(context, &cmd.utterance));
                }),
            )
            .await?;

        let reply = reply.ok_or_else(|| {
            ProcessMessageError::Storage("session update was not applied".to_string())
        })?;

        Ok(ProcessMessageResult {
            reply,
            turn_count: context.turn_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;
    use crate::domain::assistant::ShopIntent;

    async fn setup() -> (Arc<InMemorySessionStore>, ProcessMessageHandler, SessionId) {
        let store = Arc::new(InMemorySessionStore::new());
        let context = SessionContext::new(SessionId::new());
        store.create(&context).await.unwrap();
        let handler =
            ProcessMessageHandler::new(store.clone(), Arc::new(AssistantPipeline::rule_based()));
        (store, handler, context.session_id)
    }

    fn cmd(session_id: SessionId, utterance: &str) -> ProcessMessageCommand {
        ProcessMessageCommand {
            session_id,
            utterance: utterance.to_string(),
        }
    }

    #[tokio::test]
    async fn test_process_message_returns_reply() {
        let (_, handler, id) = setup().await;

        let result = handler.handle(cmd(id, "Show me running shoes")).await.unwrap();

        assert_eq!(result.reply.intent, ShopIntent::ProductSearch);
        assert_eq!(result.reply.response, "Showing you running shoes.");
        assert_eq!(result.turn_count, 1);
    }

    #[tokio::test]
    async fn test_process_message_persists_context_between_turns() {
        let (store, handler, id) = setup().await;

        handler.handle(cmd(id, "Show me running shoes")).await.unwrap();
        let result = handler.handle(cmd(id, "Under 3000")).await.unwrap();

        assert_eq!(result.reply.intent, ShopIntent::BudgetFilter);
        assert_eq!(
            result.reply.response,
            "Got it! Filtering for running shoes under ₹3000."
        );
        let stored = store.load(id).await.unwrap();
        assert_eq!(stored.slots.max_price, Some(3000));
        assert_eq!(stored.turn_count, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_turns_all_count() {
        let (store, handler, id) = setup().await;
        let handler = Arc::new(handler);

        let tasks: Vec<_> = (0..60)
            .map(|i| {
                let handler = handler.clone();
                let utterance = if i % 2 == 0 { "hoodie" } else { "under 2000" };
                tokio::spawn(async move { handler.handle(cmd(id, utterance)).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored = store.load(id).await.unwrap();
        assert_eq!(stored.turn_count, 60);
        assert_eq!(stored.slots.product_type.as_deref(), Some("hoodie"));
        assert_eq!(stored.slots.max_price, Some(2000));
    }

    #[tokio::test]
    async fn test_process_message_unknown_session() {
        let (_, handler, _) = setup().await;

        let result = handler.handle(cmd(SessionId::new(), "hoodie")).await;

        assert!(matches!(result, Err(ProcessMessageError::NotFound(_))));
    }
}

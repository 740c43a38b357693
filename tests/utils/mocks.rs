use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use callstatus::{ChatClient, ChatError, MessageId, StatusMessage};

// ============================================================================
// Mock Infrastructure
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Send(String),
    Edit(String, String),
    Redact(String),
}

/// Chat client that records calls and can be told to stall or fail
#[derive(Clone, Default)]
pub struct MockChatClient {
    calls: Arc<RwLock<Vec<RecordedCall>>>,
    next_id: Arc<RwLock<u32>>,
    failing: Arc<RwLock<bool>>,
    latency: Option<Duration>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call sleeps for `latency` before completing
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    pub async fn set_failing(&self, failing: bool) {
        *self.failing.write().await = failing;
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().await.clone()
    }

    pub async fn send_count(&self) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| matches!(c, RecordedCall::Send(_)))
            .count()
    }

    async fn complete(&self, call: RecordedCall) -> Result<(), ChatError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if *self.failing.read().await {
            return Err(ChatError::Status {
                status: 502,
                body: "bad gateway".to_string(),
            });
        }
        self.calls.write().await.push(call);
        Ok(())
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn send(&self, message: &StatusMessage) -> Result<MessageId, ChatError> {
        self.complete(RecordedCall::Send(message.body.clone()))
            .await?;
        let mut next_id = self.next_id.write().await;
        *next_id += 1;
        Ok(MessageId::new(format!("$msg-{next_id}")))
    }

    async fn edit(&self, message_id: &MessageId, message: &StatusMessage) -> Result<(), ChatError> {
        self.complete(RecordedCall::Edit(
            message_id.to_string(),
            message.body.clone(),
        ))
        .await
    }

    async fn redact(&self, message_id: &MessageId) -> Result<(), ChatError> {
        self.complete(RecordedCall::Redact(message_id.to_string()))
            .await
    }
}

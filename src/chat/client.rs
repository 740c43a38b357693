use async_trait::async_trait;
use thiserror::Error;

use super::message::{MessageId, StatusMessage};

/// Errors returned by a chat platform
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("chat server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("chat server response had no event_id")]
    MissingEventId,

    #[error("{0}")]
    Other(String),
}

/// The three things we need from a chat platform
///
/// Message identifiers are opaque: whatever `send` returns is what
/// `edit` and `redact` get back later.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Posts a new message and returns its identifier
    async fn send(&self, message: &StatusMessage) -> Result<MessageId, ChatError>;

    /// Replaces the content of an existing message in place
    async fn edit(&self, message_id: &MessageId, message: &StatusMessage) -> Result<(), ChatError>;

    /// Removes an existing message
    async fn redact(&self, message_id: &MessageId) -> Result<(), ChatError>;
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::chat::{ChatClient, DispatchError, StatusRenderer};
use crate::event::DecodeError;
use crate::room::{RoomRegistry, TrackedRooms};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RoomRegistry>,
    pub chat_client: Arc<dyn ChatClient>,
    pub tracked_rooms: Arc<TrackedRooms>,
    pub renderer: StatusRenderer,
}

impl AppState {
    pub fn new(
        registry: Arc<RoomRegistry>,
        chat_client: Arc<dyn ChatClient>,
        tracked_rooms: Arc<TrackedRooms>,
        renderer: StatusRenderer,
    ) -> Self {
        Self {
            registry,
            chat_client,
            tracked_rooms,
            renderer,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Decode(_) => StatusCode::BAD_REQUEST,
            AppError::Dispatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use crate::chat::{ChatError, MessageId, StatusMessage};
    use async_trait::async_trait;
    use tokio::sync::RwLock;

    /// A chat platform call as seen by [`RecordingChatClient`]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ChatCall {
        Send(StatusMessage),
        Edit(MessageId, StatusMessage),
        Redact(MessageId),
    }

    /// Chat client that records every call, failed ones included
    #[derive(Default)]
    pub struct RecordingChatClient {
        calls: RwLock<Vec<ChatCall>>,
        sent_ids: RwLock<Vec<MessageId>>,
        fail_next: RwLock<bool>,
    }

    impl RecordingChatClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes the next call of any kind fail
        pub async fn fail_next_call(&self) {
            *self.fail_next.write().await = true;
        }

        pub async fn calls(&self) -> Vec<ChatCall> {
            self.calls.read().await.clone()
        }

        pub async fn last_sent_id(&self) -> Option<MessageId> {
            self.sent_ids.read().await.last().cloned()
        }

        async fn record(&self, call: ChatCall) -> Result<(), ChatError> {
            self.calls.write().await.push(call);
            let mut fail_next = self.fail_next.write().await;
            if *fail_next {
                *fail_next = false;
                return Err(ChatError::Other("simulated chat failure".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ChatClient for RecordingChatClient {
        async fn send(&self, message: &StatusMessage) -> Result<MessageId, ChatError> {
            self.record(ChatCall::Send(message.clone())).await?;
            let mut sent_ids = self.sent_ids.write().await;
            let id = MessageId::new(format!("$event-{}", sent_ids.len() + 1));
            sent_ids.push(id.clone());
            Ok(id)
        }

        async fn edit(&self, message_id: &MessageId, message: &StatusMessage) -> Result<(), ChatError> {
            self.record(ChatCall::Edit(message_id.clone(), message.clone()))
                .await
        }

        async fn redact(&self, message_id: &MessageId) -> Result<(), ChatError> {
            self.record(ChatCall::Redact(message_id.clone())).await
        }
    }

    /// Builder for creating AppState with overrides for testing
    pub struct AppStateBuilder {
        chat_client: Option<Arc<dyn ChatClient>>,
        tracked_rooms: TrackedRooms,
    }

    impl AppStateBuilder {
        pub fn new() -> Self {
            Self {
                chat_client: None,
                tracked_rooms: TrackedRooms::default(),
            }
        }

        pub fn with_chat_client(mut self, client: Arc<dyn ChatClient>) -> Self {
            self.chat_client = Some(client);
            self
        }

        pub fn with_tracked_rooms<const N: usize>(mut self, rooms: [&str; N]) -> Self {
            self.tracked_rooms = TrackedRooms::new(rooms);
            self
        }

        pub fn build(self) -> AppState {
            AppState {
                registry: Arc::new(RoomRegistry::new()),
                chat_client: self
                    .chat_client
                    .unwrap_or_else(|| Arc::new(RecordingChatClient::new())),
                tracked_rooms: Arc::new(self.tracked_rooms),
                renderer: StatusRenderer::new("https://meet.example.org"),
            }
        }
    }

    impl Default for AppStateBuilder {
        fn default() -> Self {
            Self::new()
        }
    }
}

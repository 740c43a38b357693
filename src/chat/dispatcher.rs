use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

use super::client::{ChatClient, ChatError};
use super::message::MessageId;
use crate::room::{ChatAction, RegistryGuard};

/// A chat platform call that did not go through
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to send status message for {room_name}: {source}")]
    Send {
        room_name: String,
        #[source]
        source: ChatError,
    },

    #[error("failed to edit status message {message_id}: {source}")]
    Edit {
        message_id: MessageId,
        #[source]
        source: ChatError,
    },

    #[error("failed to redact status message {message_id}: {source}")]
    Redact {
        message_id: MessageId,
        #[source]
        source: ChatError,
    },
}

/// What a successful dispatch did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Nothing,
    Sent(MessageId),
    Edited(MessageId),
    Deleted(MessageId),
}

/// Runs chat actions against the chat platform
///
/// Takes the registry guard so the new message id is recorded before
/// anyone else can look at the room.
#[derive(Clone)]
pub struct ChatDispatcher {
    client: Arc<dyn ChatClient>,
}

impl ChatDispatcher {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, registry, action))]
    pub async fn dispatch(
        &self,
        registry: &mut RegistryGuard<'_>,
        room_name: &str,
        action: ChatAction,
    ) -> Result<DispatchOutcome, DispatchError> {
        match action {
            ChatAction::None => {
                debug!("No chat action required");
                Ok(DispatchOutcome::Nothing)
            }
            ChatAction::Send(message) => {
                let message_id = match self.client.send(&message).await {
                    Ok(message_id) => message_id,
                    Err(source) => {
                        return Err(DispatchError::Send {
                            room_name: room_name.to_string(),
                            source,
                        })
                    }
                };

                registry.set_message_id(room_name, message_id.clone());
                info!(message_id = %message_id, "Status message sent");
                Ok(DispatchOutcome::Sent(message_id))
            }
            ChatAction::Edit(message_id, message) => {
                if let Err(source) = self.client.edit(&message_id, &message).await {
                    return Err(DispatchError::Edit { message_id, source });
                }

                info!(message_id = %message_id, "Status message updated");
                Ok(DispatchOutcome::Edited(message_id))
            }
            ChatAction::Delete(message_id) => {
                if let Err(source) = self.client.redact(&message_id).await {
                    return Err(DispatchError::Redact { message_id, source });
                }

                info!(message_id = %message_id, "Status message redacted");
                Ok(DispatchOutcome::Deleted(message_id))
            }
        }
    }
}

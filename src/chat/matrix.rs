use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

use super::client::{ChatClient, ChatError};
use super::message::{MessageId, StatusMessage};

const HTML_FORMAT: &str = "org.matrix.custom.html";

#[derive(Debug, Deserialize)]
struct EventResponse {
    #[serde(default)]
    event_id: Option<String>,
}

/// Matrix client-server API client bound to a single room
pub struct MatrixClient {
    http_client: reqwest::Client,
    homeserver_url: Url,
    access_token: String,
    room_id: String,
}

impl MatrixClient {
    pub fn new(
        homeserver_url: &str,
        access_token: impl Into<String>,
        room_id: impl Into<String>,
    ) -> Result<Self, ChatError> {
        let homeserver_url = Url::parse(homeserver_url)
            .map_err(|e| ChatError::Other(format!("invalid homeserver url: {e}")))?;
        if homeserver_url.cannot_be_a_base() {
            return Err(ChatError::Other(format!(
                "homeserver url cannot be a base: {homeserver_url}"
            )));
        }

        Ok(Self {
            http_client: reqwest::Client::new(),
            homeserver_url,
            access_token: access_token.into().trim().to_string(),
            room_id: room_id.into(),
        })
    }

    /// Builds `/_matrix/client/v3/rooms/{room_id}/...` with every segment escaped
    fn room_endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.homeserver_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["_matrix", "client", "v3", "rooms", self.room_id.as_str()])
                .extend(segments);
        }
        url
    }

    fn new_txn_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    async fn put_event(&self, url: Url, body: &Value) -> Result<EventResponse, ChatError> {
        let response = self
            .http_client
            .put(url)
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Matrix request rejected");
            return Err(ChatError::Status {
                status: status.as_u16(),
                body: body.chars().take(300).collect(),
            });
        }

        Ok(response.json::<EventResponse>().await?)
    }
}

fn message_content(message: &StatusMessage) -> Value {
    json!({
        "msgtype": "m.text",
        "body": message.body,
        "format": HTML_FORMAT,
        "formatted_body": message.formatted_body,
    })
}

/// Content of an `m.replace` edit; older clients only see the `* ` fallback
fn replacement_content(message_id: &MessageId, message: &StatusMessage) -> Value {
    json!({
        "msgtype": "m.text",
        "body": format!("* {}", message.body),
        "format": HTML_FORMAT,
        "formatted_body": format!("* {}", message.formatted_body),
        "m.new_content": message_content(message),
        "m.relates_to": {
            "rel_type": "m.replace",
            "event_id": message_id.as_str(),
        },
    })
}

#[async_trait]
impl ChatClient for MatrixClient {
    #[instrument(skip(self, message), fields(room_id = %self.room_id))]
    async fn send(&self, message: &StatusMessage) -> Result<MessageId, ChatError> {
        let url = self.room_endpoint(&["send", "m.room.message", &Self::new_txn_id()]);
        let response = self.put_event(url, &message_content(message)).await?;

        let event_id = response.event_id.ok_or(ChatError::MissingEventId)?;
        debug!(event_id = %event_id, "Matrix message sent");
        Ok(MessageId::new(event_id))
    }

    #[instrument(skip(self, message), fields(room_id = %self.room_id))]
    async fn edit(&self, message_id: &MessageId, message: &StatusMessage) -> Result<(), ChatError> {
        let url = self.room_endpoint(&["send", "m.room.message", &Self::new_txn_id()]);
        self.put_event(url, &replacement_content(message_id, message))
            .await?;

        debug!(event_id = %message_id, "Matrix message replaced");
        Ok(())
    }

    #[instrument(skip(self), fields(room_id = %self.room_id))]
    async fn redact(&self, message_id: &MessageId) -> Result<(), ChatError> {
        let url = self.room_endpoint(&["redact", message_id.as_str(), &Self::new_txn_id()]);
        self.put_event(url, &json!({})).await?;

        debug!(event_id = %message_id, "Matrix message redacted");
        Ok(())
    }
}

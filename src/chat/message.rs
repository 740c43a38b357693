use serde::{Deserialize, Serialize};

/// Opaque identifier of a message posted to the chat room
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text of a status message in plain and HTML form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub body: String,
    pub formatted_body: String,
}

/// Renders the status line for a conference room
#[derive(Debug, Clone)]
pub struct StatusRenderer {
    base_url: String,
}

impl StatusRenderer {
    /// `base_url` is the conference server the room link points at
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn render(&self, room_name: &str, participant_count: u32) -> StatusMessage {
        let room_html = escape_html(room_name);
        StatusMessage {
            body: format!(
                "☎️ Call at {room_name} started — {participant_count} participant(s) in the call"
            ),
            formatted_body: format!(
                "☎️ Call at <a href='{base}/{room_html}'>{room_html}</a> started<br>Currently {participant_count} participant(s) in the call",
                base = escape_html(&self.base_url)
            ),
        }
    }
}

/// Escapes text for use in HTML content and quoted attributes
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

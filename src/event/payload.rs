use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

use super::kind::EventKind;

/// Errors produced while decoding a webhook body
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid webhook payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid active_occupants_count: {0}")]
    InvalidOccupantCount(i64),
}

/// Occupant details attached to join/leave events
///
/// Timestamps are only logged, so any JSON value is accepted for them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Occupant {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub occupant_jid: Option<String>,
    #[serde(default)]
    pub joined_at: Option<Value>,
    #[serde(default)]
    pub left_at: Option<Value>,
}

/// Raw body Prosody posts for every room event
///
/// Only `event_name`, `room_name` and `active_occupants_count` drive
/// behaviour; the rest is kept for logging and must never make a body
/// fail to decode, so those fields accept `null` and loose types.
#[derive(Debug, Clone, Deserialize)]
pub struct ProsodyHookPayload {
    pub event_name: String,
    pub room_name: String,
    #[serde(default)]
    pub active_occupants_count: i64,
    #[serde(default)]
    pub room_jid: Option<String>,
    #[serde(default)]
    pub is_breakout: Option<bool>,
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub destroyed_at: Option<Value>,
    #[serde(default)]
    pub occupant: Option<Occupant>,
    #[serde(default)]
    pub all_occupants: Option<Vec<Occupant>>,
}

/// A decoded room event, ready for reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEvent {
    pub kind: EventKind,
    pub room_name: String,
    pub active_occupants_count: u32,
}

impl WebhookEvent {
    pub fn new(kind: EventKind, room_name: impl Into<String>, active_occupants_count: u32) -> Self {
        Self {
            kind,
            room_name: room_name.into(),
            active_occupants_count,
        }
    }
}

impl TryFrom<ProsodyHookPayload> for WebhookEvent {
    type Error = DecodeError;

    fn try_from(payload: ProsodyHookPayload) -> Result<Self, Self::Error> {
        let count = u32::try_from(payload.active_occupants_count)
            .map_err(|_| DecodeError::InvalidOccupantCount(payload.active_occupants_count))?;

        Ok(Self {
            kind: EventKind::from_event_name(&payload.event_name),
            room_name: payload.room_name,
            active_occupants_count: count,
        })
    }
}

/// Decodes a raw webhook body into a typed event
#[instrument(skip(body), fields(body_len = body.len()))]
pub fn decode(body: &[u8]) -> Result<WebhookEvent, DecodeError> {
    let payload: ProsodyHookPayload = serde_json::from_slice(body)?;

    debug!(
        event = %payload.event_name,
        room_name = %payload.room_name,
        room_jid = payload.room_jid.as_deref().unwrap_or_default(),
        is_breakout = payload.is_breakout.unwrap_or_default(),
        occupant = payload
            .occupant
            .as_ref()
            .and_then(|o| o.name.as_deref())
            .unwrap_or_default(),
        all_occupants = payload.all_occupants.as_ref().map_or(0, Vec::len),
        "Decoded webhook payload"
    );

    WebhookEvent::try_from(payload)
}

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::chat::MessageId;

/// Last known state of one conference room
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomState {
    pub participant_count: u32,
    /// Status message currently posted for this room, if any
    pub message_id: Option<MessageId>,
}

impl RoomState {
    pub fn has_status_message(&self) -> bool {
        self.message_id.is_some()
    }
}

/// Read-only view of a registry entry, returned by `GET /rooms`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub room_name: String,
    pub participant_count: u32,
    pub has_status_message: bool,
}

/// Conference rooms we post status messages for
///
/// Names are matched exactly, including case.
#[derive(Debug, Clone, Default)]
pub struct TrackedRooms(HashSet<String>);

impl TrackedRooms {
    pub fn new<I, S>(rooms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(rooms.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, room_name: &str) -> bool {
        self.0.contains(room_name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

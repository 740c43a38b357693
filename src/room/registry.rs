use std::collections::HashMap;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, instrument};

use super::models::{RoomSnapshot, RoomState};
use crate::chat::MessageId;

/// In-memory map of conference room name to room state
///
/// The map sits behind a single async mutex and can only be touched
/// through a [`RegistryGuard`]. Callers keep the guard for the whole
/// lookup, chat call and write-back so concurrent webhooks for a room
/// can never both decide to post a fresh message.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: Mutex<HashMap<String, RoomState>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }

    /// Waits for exclusive access to the registry
    ///
    /// Waiters are served in the order they called `lock`.
    pub async fn lock(&self) -> RegistryGuard<'_> {
        RegistryGuard {
            rooms: self.rooms.lock().await,
        }
    }

    /// Copies every entry out, sorted by room name
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Vec<RoomSnapshot> {
        let guard = self.lock().await;
        if guard.is_empty() {
            return Vec::new();
        }

        let mut rooms = Vec::with_capacity(guard.len());
        rooms.extend(guard.rooms.iter().map(|(name, state)| RoomSnapshot {
            room_name: name.clone(),
            participant_count: state.participant_count,
            has_status_message: state.has_status_message(),
        }));
        rooms.sort_by(|a, b| a.room_name.cmp(&b.room_name));
        debug!(room_count = rooms.len(), "Registry snapshot taken");
        rooms
    }
}

/// Exclusive access to the room registry
pub struct RegistryGuard<'a> {
    rooms: MutexGuard<'a, HashMap<String, RoomState>>,
}

impl RegistryGuard<'_> {
    pub fn get(&self, room_name: &str) -> Option<&RoomState> {
        self.rooms.get(room_name)
    }

    /// Returns the room's state, inserting an empty one first if needed
    pub fn get_or_create(&mut self, room_name: &str) -> &mut RoomState {
        if !self.rooms.contains_key(room_name) {
            debug!(room_name = %room_name, "Tracking new room");
        }
        self.rooms.entry(room_name.to_string()).or_default()
    }

    pub fn set_participant_count(&mut self, room_name: &str, participant_count: u32) {
        if let Some(state) = self.rooms.get_mut(room_name) {
            state.participant_count = participant_count;
        }
    }

    pub fn set_message_id(&mut self, room_name: &str, message_id: MessageId) {
        if let Some(state) = self.rooms.get_mut(room_name) {
            state.message_id = Some(message_id);
        }
    }

    pub fn remove(&mut self, room_name: &str) -> Option<RoomState> {
        let removed = self.rooms.remove(room_name);
        if removed.is_some() {
            debug!(room_name = %room_name, "Stopped tracking room");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

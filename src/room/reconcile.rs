use tracing::warn;

use super::models::RoomState;
use crate::chat::{MessageId, StatusMessage, StatusRenderer};
use crate::event::{EventKind, WebhookEvent};

/// What the chat room should see after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    None,
    Send(StatusMessage),
    Edit(MessageId, StatusMessage),
    Delete(MessageId),
}

/// How the registry entry for the event's room changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryTransition {
    Unchanged,
    /// Creates the entry if the room is not tracked yet
    SetParticipantCount(u32),
    Remove,
}

/// Outcome of reconciling one event against the current room state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub transition: RegistryTransition,
    pub action: ChatAction,
}

impl Reconciliation {
    fn new(transition: RegistryTransition, action: ChatAction) -> Self {
        Self { transition, action }
    }

    fn nothing() -> Self {
        Self::new(RegistryTransition::Unchanged, ChatAction::None)
    }
}

/// Decides the registry change and chat action for an event
///
/// `current` is the room's registry entry, or `None` if the room has not
/// been seen yet; a missing entry behaves like an empty one. The caller
/// is responsible for skipping rooms outside the tracked set and for
/// holding the registry lock while it applies the result.
pub fn reconcile(
    event: &WebhookEvent,
    current: Option<&RoomState>,
    renderer: &StatusRenderer,
) -> Reconciliation {
    let room_name = event.room_name.as_str();
    let message_id = current.and_then(|state| state.message_id.clone());
    let participant_count = current.map_or(0, |state| state.participant_count);

    match &event.kind {
        EventKind::RoomCreated => {
            let action = match message_id {
                Some(_) => ChatAction::None,
                None => ChatAction::Send(renderer.render(room_name, 0)),
            };
            Reconciliation::new(RegistryTransition::SetParticipantCount(0), action)
        }

        EventKind::OccupantJoined => {
            let count = event.active_occupants_count;
            Reconciliation::new(
                RegistryTransition::SetParticipantCount(count),
                send_or_edit(message_id, renderer.render(room_name, count)),
            )
        }

        // A leave after the room already emptied is stale or duplicated
        EventKind::OccupantLeft if participant_count == 0 => match current {
            Some(_) => Reconciliation::nothing(),
            None => Reconciliation::new(
                RegistryTransition::SetParticipantCount(0),
                ChatAction::None,
            ),
        },

        EventKind::OccupantLeft => {
            let count = event.active_occupants_count;
            Reconciliation::new(
                RegistryTransition::SetParticipantCount(count),
                send_or_edit(message_id, renderer.render(room_name, count)),
            )
        }

        EventKind::RoomDestroyed => {
            let action = message_id.map_or(ChatAction::None, ChatAction::Delete);
            let transition = match current {
                Some(_) => RegistryTransition::Remove,
                None => RegistryTransition::Unchanged,
            };
            Reconciliation::new(transition, action)
        }

        EventKind::Unrecognized(name) => {
            warn!(room_name = %room_name, event = %name, "Unrecognized event type received");
            Reconciliation::nothing()
        }
    }
}

/// Edits the existing status message, or posts one if an earlier send never landed
fn send_or_edit(message_id: Option<MessageId>, message: StatusMessage) -> ChatAction {
    match message_id {
        Some(id) => ChatAction::Edit(id, message),
        None => ChatAction::Send(message),
    }
}

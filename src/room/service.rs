use std::sync::Arc;
use tracing::{debug, error, instrument};

use super::{
    models::TrackedRooms,
    reconcile::{reconcile, RegistryTransition},
    registry::RoomRegistry,
};
use crate::chat::{ChatClient, ChatDispatcher, DispatchError, DispatchOutcome, StatusRenderer};
use crate::event::WebhookEvent;

/// Applies webhook events to the registry and the chat room
pub struct RoomService {
    registry: Arc<RoomRegistry>,
    dispatcher: ChatDispatcher,
    tracked_rooms: Arc<TrackedRooms>,
    renderer: StatusRenderer,
}

impl RoomService {
    pub fn new(
        registry: Arc<RoomRegistry>,
        chat_client: Arc<dyn ChatClient>,
        tracked_rooms: Arc<TrackedRooms>,
        renderer: StatusRenderer,
    ) -> Self {
        Self {
            registry,
            dispatcher: ChatDispatcher::new(chat_client),
            tracked_rooms,
            renderer,
        }
    }

    /// Handles one decoded event end to end
    ///
    /// The registry lock is held from lookup until the chat call has
    /// finished and its result is written back, so events are applied
    /// one at a time in arrival order.
    #[instrument(skip(self, event), fields(room_name = %event.room_name, event = %event.kind))]
    pub async fn handle_event(&self, event: &WebhookEvent) -> Result<DispatchOutcome, DispatchError> {
        if !self.tracked_rooms.contains(&event.room_name) {
            debug!("Received event for untracked room");
            return Ok(DispatchOutcome::Nothing);
        }

        let mut registry = self.registry.lock().await;

        let reconciliation = reconcile(event, registry.get(&event.room_name), &self.renderer);
        debug!(
            transition = ?reconciliation.transition,
            participant_count = event.active_occupants_count,
            registry_size = registry.len(),
            "Reconciled event"
        );

        match reconciliation.transition {
            RegistryTransition::Unchanged => {}
            RegistryTransition::SetParticipantCount(count) => {
                registry.get_or_create(&event.room_name);
                registry.set_participant_count(&event.room_name, count);
            }
            RegistryTransition::Remove => {
                registry.remove(&event.room_name);
            }
        }

        self.dispatcher
            .dispatch(&mut registry, &event.room_name, reconciliation.action)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send or update status message"))
    }
}

use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::RoomSnapshot, service::RoomService};
use crate::event;
use crate::shared::{AppError, AppState};

/// HTTP handler for Prosody room webhooks
///
/// POST /
/// Returns 200 once the event is applied or ignored, 400 for a body that
/// does not decode and 500 when the chat platform call fails.
#[instrument(name = "receive_webhook", skip(state, body))]
pub async fn receive_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<&'static str, AppError> {
    let event = event::decode(&body)?;
    info!(
        room_name = %event.room_name,
        event = %event.kind,
        participant_count = event.active_occupants_count,
        "Received room event"
    );

    // Use injected registry and chat client from app state
    let service = RoomService::new(
        Arc::clone(&state.registry),
        Arc::clone(&state.chat_client),
        Arc::clone(&state.tracked_rooms),
        state.renderer.clone(),
    );
    service.handle_event(&event).await?;

    Ok("Webhook received successfully!")
}

/// HTTP handler for listing tracked rooms
///
/// GET /rooms
#[instrument(name = "list_rooms", skip(state))]
pub async fn list_rooms(State(state): State<AppState>) -> Json<Vec<RoomSnapshot>> {
    let rooms = state.registry.snapshot().await;
    info!(room_count = rooms.len(), "Rooms listed successfully");
    Json(rooms)
}

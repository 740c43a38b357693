// Library crate for the call status bridge
// This file exposes the public API for integration tests

pub mod chat;
pub mod config;
pub mod event;
pub mod room;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use chat::{ChatClient, ChatError, DispatchError, DispatchOutcome, MessageId, StatusMessage};
pub use config::Config;
pub use event::{EventKind, WebhookEvent};
pub use room::{RoomRegistry, RoomService, TrackedRooms};
pub use shared::{AppError, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Builds the HTTP router for the service
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", post(room::receive_webhook))
        .route("/rooms", get(room::list_rooms))
        .route("/health", get(|| async { "ok" }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

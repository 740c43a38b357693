use std::sync::Arc;

use callstatus::{
    chat::StatusRenderer, EventKind, RoomRegistry, RoomService, TrackedRooms, WebhookEvent,
};

use super::mocks::MockChatClient;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub registry: Arc<RoomRegistry>,
    pub chat_client: MockChatClient,
    pub service: Arc<RoomService>,
}

pub struct TestSetupBuilder {
    tracked_rooms: Vec<String>,
    chat_client: MockChatClient,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            tracked_rooms: vec!["standup".to_string()],
            chat_client: MockChatClient::new(),
        }
    }

    pub fn with_tracked_rooms(mut self, rooms: Vec<&str>) -> Self {
        self.tracked_rooms = rooms.into_iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_chat_client(mut self, chat_client: MockChatClient) -> Self {
        self.chat_client = chat_client;
        self
    }

    pub fn build(self) -> TestSetup {
        let registry = Arc::new(RoomRegistry::new());
        let service = Arc::new(RoomService::new(
            registry.clone(),
            Arc::new(self.chat_client.clone()),
            Arc::new(TrackedRooms::new(self.tracked_rooms)),
            StatusRenderer::new("https://meet.example.org"),
        ));

        TestSetup {
            registry,
            chat_client: self.chat_client,
            service,
        }
    }
}

pub fn created(room: &str) -> WebhookEvent {
    WebhookEvent::new(EventKind::RoomCreated, room, 0)
}

pub fn joined(room: &str, count: u32) -> WebhookEvent {
    WebhookEvent::new(EventKind::OccupantJoined, room, count)
}

pub fn left(room: &str, count: u32) -> WebhookEvent {
    WebhookEvent::new(EventKind::OccupantLeft, room, count)
}

pub fn destroyed(room: &str) -> WebhookEvent {
    WebhookEvent::new(EventKind::RoomDestroyed, room, 0)
}

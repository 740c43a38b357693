// Public API - what other modules can use
pub use handlers::{list_rooms, receive_webhook};
pub use models::{RoomSnapshot, RoomState, TrackedRooms};
pub use reconcile::{reconcile, ChatAction, Reconciliation, RegistryTransition};
pub use registry::{RegistryGuard, RoomRegistry};
pub use service::RoomService;

// Internal modules
mod handlers;
pub mod models;
mod reconcile;
pub mod registry;
mod service;

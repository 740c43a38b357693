// Webhook event decoding
//
// Turns raw Prosody webhook bodies into typed events. Nothing in here
// touches room state.

// Public API - what other modules can use
pub use kind::EventKind;
pub use payload::{decode, DecodeError, Occupant, ProsodyHookPayload, WebhookEvent};

// Internal modules
mod kind;
mod payload;

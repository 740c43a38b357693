// Chat platform side: status message rendering, the client capability
// and the dispatcher that applies reconciled actions.

// Public API - what other modules can use
pub use client::{ChatClient, ChatError};
pub use dispatcher::{ChatDispatcher, DispatchError, DispatchOutcome};
pub use matrix::MatrixClient;
pub use message::{MessageId, StatusMessage, StatusRenderer};

// Internal modules
mod client;
mod dispatcher;
mod matrix;
mod message;

pub mod mocks;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use mocks::{MockChatClient, RecordedCall};
#[allow(unused_imports)]
pub use setup::{created, destroyed, joined, left, TestSetup, TestSetupBuilder};

// courier-core — session-scoped message storage and retrieval
//
// Holds messages keyed by recipient identity for the lifetime of the
// process. Everything here is a synchronous call/return API; input handling
// and presentation live in collaborator crates that only call
// `MessagingService`.

pub mod message;
pub mod service;
pub mod store;

pub use message::Message;
pub use service::MessagingService;
pub use store::{MemoryStore, MessageStore, StoreError};

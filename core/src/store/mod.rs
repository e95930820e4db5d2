// Store module — recipient-keyed message storage

pub mod memory;

pub use memory::MemoryStore;

use crate::message::Message;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Storage capability for messages keyed by recipient identity.
///
/// The shipped backend is in-memory and never fails; the `Result` signatures
/// exist so an on-disk or networked backend can be substituted without
/// changing `MessagingService`.
pub trait MessageStore: Send + Sync {
    /// Append `message` to the sequence for its recipient, creating the
    /// sequence on first message to a new recipient. Insertion order is
    /// preserved; nothing is ever removed or altered.
    fn save(&self, message: Message) -> Result<(), StoreError>;

    /// Messages stored for `recipient`, oldest first. An unknown recipient
    /// yields an empty vec, never an error — callers cannot distinguish
    /// "never seen" from "zero messages".
    fn list_for(&self, recipient: &str) -> Result<Vec<Message>, StoreError>;
}

// Messaging service — the façade front-end code talks to

use crate::message::Message;
use crate::store::{MessageStore, StoreError};
use std::sync::Arc;
use tracing::debug;

/// Mediates message creation and retrieval over an injected store.
///
/// Stateless beyond the store handle; the storage backend is chosen by the
/// caller at construction and never changes afterwards.
pub struct MessagingService {
    store: Arc<dyn MessageStore>,
}

impl MessagingService {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// Construct a message from the three strings and save it.
    ///
    /// Performs no validation: empty sender, recipient, or content are
    /// accepted silently. Rejecting them would change observed behavior.
    pub fn send_message(
        &self,
        content: &str,
        sender: &str,
        recipient: &str,
    ) -> Result<(), StoreError> {
        debug!("Sending message from {} to {}", sender, recipient);
        self.store.save(Message::new(content, sender, recipient))
    }

    /// Messages stored for `recipient`, oldest first, exactly as the store
    /// returns them.
    pub fn messages_for_recipient(&self, recipient: &str) -> Result<Vec<Message>, StoreError> {
        debug!("Listing messages for {}", recipient);
        self.store.list_for(recipient)
    }
}

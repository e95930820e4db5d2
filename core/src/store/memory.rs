// In-memory store — session-scoped, append-only

use crate::message::Message;
use crate::store::{MessageStore, StoreError};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// In-memory message storage keyed by recipient identity.
///
/// State lives in the instance, not in ambient globals: construct one at
/// startup and share it behind `Arc<dyn MessageStore>`. The map only grows
/// for the lifetime of the process — there is no deletion.
///
/// The lock is the read-modify-write guard around lazy sequence creation,
/// so the store stays sound if a wrapper ever exposes it to concurrent
/// callers.
pub struct MemoryStore {
    inbox: RwLock<HashMap<String, Vec<Message>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inbox: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStore for MemoryStore {
    fn save(&self, message: Message) -> Result<(), StoreError> {
        debug!(
            "Saving message from {} to {}",
            message.sender, message.recipient
        );
        self.inbox
            .write()
            .entry(message.recipient.clone())
            .or_default()
            .push(message);
        Ok(())
    }

    fn list_for(&self, recipient: &str) -> Result<Vec<Message>, StoreError> {
        Ok(self.inbox.read().get(recipient).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_list() {
        let store = MemoryStore::new();

        store.save(Message::new("hello", "alice", "bob")).unwrap();
        store.save(Message::new("world", "carol", "bob")).unwrap();

        let messages = store.list_for("bob").unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "hello");
        assert_eq!(messages[1].content, "world");
    }

    #[test]
    fn test_unknown_recipient_is_empty_not_absent() {
        let store = MemoryStore::new();
        assert_eq!(store.list_for("nobody").unwrap(), Vec::<Message>::new());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let store = MemoryStore::new();
        for i in 0..10 {
            store
                .save(Message::new(&format!("msg{i}"), "alice", "bob"))
                .unwrap();
        }

        let contents: Vec<String> = store
            .list_for("bob")
            .unwrap()
            .into_iter()
            .map(|m| m.content)
            .collect();
        let expected: Vec<String> = (0..10).map(|i| format!("msg{i}")).collect();
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_recipients_are_independent() {
        let store = MemoryStore::new();
        store.save(Message::new("for x", "a", "x")).unwrap();

        assert!(store.list_for("y").unwrap().is_empty());

        store.save(Message::new("for y", "b", "y")).unwrap();
        assert_eq!(store.list_for("x").unwrap().len(), 1);
        assert_eq!(store.list_for("y").unwrap().len(), 1);
    }

    #[test]
    fn test_every_listed_message_addressed_to_key() {
        let store = MemoryStore::new();
        store.save(Message::new("m1", "a", "x")).unwrap();
        store.save(Message::new("m2", "b", "y")).unwrap();
        store.save(Message::new("m3", "c", "x")).unwrap();

        for msg in store.list_for("x").unwrap() {
            assert_eq!(msg.recipient, "x");
        }
    }

    #[test]
    fn test_listing_does_not_consume() {
        let store = MemoryStore::new();
        store.save(Message::new("hi", "alice", "bob")).unwrap();

        assert_eq!(store.list_for("bob").unwrap().len(), 1);
        assert_eq!(store.list_for("bob").unwrap().len(), 1);
    }

    #[test]
    fn test_empty_identity_is_a_valid_key() {
        let store = MemoryStore::new();
        store.save(Message::new("hi", "", "")).unwrap();

        let messages = store.list_for("").unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, "");
    }
}

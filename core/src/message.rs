// Message type — the immutable value the store holds

use serde::{Deserialize, Serialize};

/// A message addressed to a single recipient.
///
/// Plain structural value: equality is field-by-field, and nothing is
/// mutated after construction. Once saved, the store owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message body
    pub content: String,
    /// Sender identity
    pub sender: String,
    /// Recipient identity — the store's lookup key
    pub recipient: String,
}

impl Message {
    /// Create a message. Construction is total: empty strings are accepted
    /// in every field.
    pub fn new(content: &str, sender: &str, recipient: &str) -> Self {
        Self {
            content: content.to_string(),
            sender: sender.to_string(),
            recipient: recipient.to_string(),
        }
    }
}

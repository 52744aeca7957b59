//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

/// Identifier of a conversation, i.e. the chat the user writes from.
///
/// Private chats carry positive identifiers; group and channel chats
/// carry negative ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(i64);

impl ConversationId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Returns true for a one-to-one chat with a person.
    pub fn is_private_chat(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Destination of an outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipientId(i64);

impl RecipientId {
    /// Creates a recipient, rejecting the zero id which no chat can have.
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::invalid_format(
                "recipient_id",
                "chat id cannot be zero",
            ));
        }
        Ok(Self(id))
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<ConversationId> for RecipientId {
    fn from(id: ConversationId) -> Self {
        Self(id.0)
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of one inbound event, used to correlate log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random EventId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_conversation_id_is_private_chat() {
        assert!(ConversationId::new(42).is_private_chat());
        assert!(!ConversationId::new(-100123).is_private_chat());
    }

    #[test]
    fn recipient_rejects_zero() {
        assert!(matches!(
            RecipientId::new(0),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert_eq!(RecipientId::new(-1001).unwrap().as_i64(), -1001);
    }

    #[test]
    fn conversation_converts_to_recipient() {
        let recipient: RecipientId = ConversationId::new(7).into();
        assert_eq!(recipient.as_i64(), 7);
    }

    #[test]
    fn conversation_id_serializes_transparently() {
        let json = serde_json::to_string(&ConversationId::new(99)).unwrap();
        assert_eq!(json, "99");
    }

    #[test]
    fn event_ids_are_unique() {
        assert_ne!(EventId::new(), EventId::new());
    }
}

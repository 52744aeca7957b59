//! Inbound events delivered by the message gateway.

use super::menu::MenuToken;
use crate::domain::foundation::ConversationId;

/// Something the user did in a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A typed text message.
    Text {
        conversation_id: ConversationId,
        text: String,
    },
    /// A button press carrying a menu token.
    MenuSelection {
        conversation_id: ConversationId,
        token: MenuToken,
    },
    /// Anything that is not text: photos, stickers, locations, ...
    OtherContent { conversation_id: ConversationId },
}

/// Borrowed view of an event's content, for matching in the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    Text(&'a str),
    Menu(MenuToken),
    Other,
}

impl InboundEvent {
    pub fn text(conversation_id: ConversationId, text: impl Into<String>) -> Self {
        Self::Text {
            conversation_id,
            text: text.into(),
        }
    }

    pub fn menu(conversation_id: ConversationId, token: MenuToken) -> Self {
        Self::MenuSelection {
            conversation_id,
            token,
        }
    }

    pub fn other(conversation_id: ConversationId) -> Self {
        Self::OtherContent { conversation_id }
    }

    pub fn conversation_id(&self) -> ConversationId {
        match self {
            Self::Text { conversation_id, .. }
            | Self::MenuSelection { conversation_id, .. }
            | Self::OtherContent { conversation_id } => *conversation_id,
        }
    }

    pub fn payload(&self) -> Payload<'_> {
        match self {
            Self::Text { text, .. } => Payload::Text(text),
            Self::MenuSelection { token, .. } => Payload::Menu(*token),
            Self::OtherContent { .. } => Payload::Other,
        }
    }

    /// Short category name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::MenuSelection { .. } => "menu_selection",
            Self::OtherContent { .. } => "other_content",
        }
    }
}

//! Translation of Telegram updates into intake events.
//!
//! Kept free of teloxide types so every rule can be tested without a bot.

use crate::config::MenuStyle;
use crate::domain::foundation::ConversationId;
use crate::domain::intake::{InboundEvent, MenuToken};

const CANCEL_COMMAND: &str = "/cancel";

/// A chat message reduced to what the form cares about.
#[derive(Debug, Clone, Copy)]
pub struct IncomingMessage<'a> {
    pub chat_id: i64,
    pub is_private: bool,
    pub text: Option<&'a str>,
}

/// A button press reduced to what the form cares about.
#[derive(Debug, Clone, Copy)]
pub struct IncomingCallback<'a> {
    pub chat_id: i64,
    pub is_private: bool,
    pub data: Option<&'a str>,
}

/// Why an update produced no event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    /// Groups and channels, including the doctors' chat.
    NotPrivate,
    /// Callback data that names no menu token.
    UnknownButton,
}

pub fn translate_message(
    message: IncomingMessage<'_>,
    style: MenuStyle,
) -> Result<InboundEvent, Ignored> {
    let conversation_id = private_conversation(message.chat_id, message.is_private)?;

    let Some(text) = message.text else {
        return Ok(InboundEvent::other(conversation_id));
    };

    if is_command(text, CANCEL_COMMAND) {
        return Ok(InboundEvent::menu(conversation_id, MenuToken::Cancel));
    }
    if style == MenuStyle::Reply {
        if let Some(token) = MenuToken::from_label(text.trim()) {
            return Ok(InboundEvent::menu(conversation_id, token));
        }
    }
    Ok(InboundEvent::text(conversation_id, text))
}

pub fn translate_callback(callback: IncomingCallback<'_>) -> Result<InboundEvent, Ignored> {
    let conversation_id = private_conversation(callback.chat_id, callback.is_private)?;
    callback
        .data
        .and_then(MenuToken::from_wire)
        .map(|token| InboundEvent::menu(conversation_id, token))
        .ok_or(Ignored::UnknownButton)
}

fn private_conversation(chat_id: i64, is_private: bool) -> Result<ConversationId, Ignored> {
    let id = ConversationId::new(chat_id);
    if is_private && id.is_private_chat() {
        Ok(id)
    } else {
        Err(Ignored::NotPrivate)
    }
}

/// Matches `/command` and `/command@botname`, ignoring arguments.
fn is_command(text: &str, command: &str) -> bool {
    let Some(head) = text.split_whitespace().next() else {
        return false;
    };
    let name = head.split('@').next().unwrap_or(head);
    name.eq_ignore_ascii_case(command)
}

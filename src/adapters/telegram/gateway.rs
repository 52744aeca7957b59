//! Telegram implementation of the MessageGateway port.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::RequestError;

use super::keyboard;
use crate::config::MenuStyle;
use crate::domain::foundation::RecipientId;
use crate::domain::intake::{OutboundMessage, TextFormat};
use crate::ports::{GatewayError, MessageGateway};

/// Sends intake messages through the Bot API.
#[derive(Clone)]
pub struct TelegramGateway {
    bot: Bot,
    style: MenuStyle,
}

impl TelegramGateway {
    pub fn new(bot: Bot, style: MenuStyle) -> Self {
        Self { bot, style }
    }
}

#[async_trait]
impl MessageGateway for TelegramGateway {
    async fn send_text(
        &self,
        recipient: RecipientId,
        message: OutboundMessage,
    ) -> Result<(), GatewayError> {
        let markup = keyboard::render(&message.menu, self.style);

        let mut request = self
            .bot
            .send_message(ChatId(recipient.as_i64()), message.text);
        if message.format == TextFormat::Html {
            request = request.parse_mode(ParseMode::Html);
        }
        if let Some(markup) = markup {
            request = request.reply_markup(markup);
        }

        request
            .await
            .map_err(|e| delivery_error(recipient, e))?;
        Ok(())
    }
}

/// Network failures mean the API was unreachable; anything else was a
/// rejection of this particular delivery.
fn delivery_error(recipient: RecipientId, error: RequestError) -> GatewayError {
    match error {
        RequestError::Network(e) => GatewayError::Unavailable(e.to_string()),
        other => GatewayError::delivery_failed(recipient, other.to_string()),
    }
}

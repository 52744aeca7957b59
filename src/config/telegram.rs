//! Telegram configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::RecipientId;

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot API token issued by BotFather; redacted in `Debug` output
    #[serde(default = "default_bot_token")]
    pub bot_token: SecretString,

    /// Chat that receives completed requests (usually a negative group id)
    #[serde(default)]
    pub doctors_chat_id: i64,

    /// How menus are rendered
    #[serde(default)]
    pub menu_style: MenuStyle,

    /// Drop updates that queued up while the bot was offline
    #[serde(default = "default_skip_pending_updates")]
    pub skip_pending_updates: bool,
}

/// Keyboard flavour used for menus
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MenuStyle {
    /// Buttons under the message; presses arrive as callback queries
    #[default]
    Inline,
    /// Buttons replacing the keyboard; presses arrive as the label text
    Reply,
}

impl TelegramConfig {
    /// Doctors destination as a typed recipient
    pub fn doctors_recipient(&self) -> Result<RecipientId, ValidationError> {
        RecipientId::new(self.doctors_chat_id).map_err(|_| ValidationError::InvalidDoctorsChatId)
    }

    /// Validate Telegram configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let token = self.bot_token.expose_secret();
        if token.is_empty() {
            return Err(ValidationError::MissingRequired("TELEGRAM__BOT_TOKEN"));
        }
        // Tokens look like "<bot id>:<secret>"
        match token.split_once(':') {
            Some((id, secret))
                if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) && !secret.is_empty() => {}
            _ => return Err(ValidationError::InvalidBotToken),
        }
        if self.doctors_chat_id == 0 {
            return Err(ValidationError::MissingRequired("TELEGRAM__DOCTORS_CHAT_ID"));
        }
        Ok(())
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: default_bot_token(),
            doctors_chat_id: 0,
            menu_style: MenuStyle::default(),
            skip_pending_updates: default_skip_pending_updates(),
        }
    }
}

fn default_bot_token() -> SecretString {
    SecretString::new(String::new())
}

fn default_skip_pending_updates() -> bool {
    true
}

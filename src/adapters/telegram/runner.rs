//! Long-polling loop feeding Telegram updates into the dialogue driver.

use std::sync::Arc;

use secrecy::ExposeSecret;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, MaybeInaccessibleMessage, Message};
use teloxide::RequestError;
use tracing::{debug, error, info, warn};

use super::gateway::TelegramGateway;
use super::inbound::{self, IncomingCallback, IncomingMessage};
use crate::application::DialogueDriver;
use crate::config::{MenuStyle, TelegramConfig};
use crate::domain::intake::InboundEvent;

/// Errors that stop the runner before it starts polling
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("Telegram request failed: {0}")]
    Telegram(#[from] RequestError),
}

/// Owns the bot and forwards every private-chat update to the driver.
pub struct TelegramRunner {
    bot: Bot,
    driver: Arc<DialogueDriver>,
    style: MenuStyle,
    skip_pending_updates: bool,
}

impl TelegramRunner {
    pub fn new(bot: Bot, driver: Arc<DialogueDriver>, config: &TelegramConfig) -> Self {
        Self {
            bot,
            driver,
            style: config.menu_style,
            skip_pending_updates: config.skip_pending_updates,
        }
    }

    /// Bot client built from the configured token.
    pub fn bot(config: &TelegramConfig) -> Bot {
        Bot::new(config.bot_token.expose_secret())
    }

    /// Gateway sharing the runner's bot and menu style.
    pub fn gateway(bot: &Bot, config: &TelegramConfig) -> TelegramGateway {
        TelegramGateway::new(bot.clone(), config.menu_style)
    }

    /// Polls until Ctrl-C.
    ///
    /// # Errors
    /// Returns `RunnerError` if pending updates could not be dropped.
    pub async fn run(self: Arc<Self>) -> Result<(), RunnerError> {
        if self.skip_pending_updates {
            self.bot.delete_webhook().drop_pending_updates(true).await?;
            info!("Dropped updates received while offline");
        }

        let handler = dptree::entry()
            .branch(Update::filter_message().endpoint({
                let runner = Arc::clone(&self);
                move |msg: Message| {
                    let runner = Arc::clone(&runner);
                    async move {
                        runner.on_message(msg).await;
                        respond(())
                    }
                }
            }))
            .branch(Update::filter_callback_query().endpoint({
                let runner = Arc::clone(&self);
                move |q: CallbackQuery| {
                    let runner = Arc::clone(&runner);
                    async move {
                        runner.on_callback(q).await;
                        respond(())
                    }
                }
            }));

        info!(style = ?self.style, "Starting Telegram polling");
        Dispatcher::builder(self.bot.clone(), handler)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
        info!("Telegram polling stopped");
        Ok(())
    }

    async fn on_message(&self, msg: Message) {
        let incoming = IncomingMessage {
            chat_id: msg.chat.id.0,
            is_private: msg.chat.is_private(),
            text: msg.text(),
        };
        match inbound::translate_message(incoming, self.style) {
            Ok(event) => self.dispatch(event).await,
            Err(reason) => debug!(chat_id = msg.chat.id.0, ?reason, "Ignoring message"),
        }
    }

    async fn on_callback(&self, q: CallbackQuery) {
        // Stops the client's loading spinner whatever happens next.
        if let Err(e) = self.bot.answer_callback_query(q.id.clone()).await {
            warn!(error = %e, "Failed to answer callback query");
        }

        let chat = match &q.message {
            Some(MaybeInaccessibleMessage::Regular(m)) => &m.chat,
            Some(MaybeInaccessibleMessage::Inaccessible(m)) => &m.chat,
            None => {
                debug!(user_id = q.from.id.0, "Ignoring callback without a chat");
                return;
            }
        };
        let incoming = IncomingCallback {
            chat_id: chat.id.0,
            is_private: chat.is_private(),
            data: q.data.as_deref(),
        };
        match inbound::translate_callback(incoming) {
            Ok(event) => self.dispatch(event).await,
            Err(reason) => warn!(
                chat_id = chat.id.0,
                data = ?q.data,
                ?reason,
                "Ignoring button press"
            ),
        }
    }

    async fn dispatch(&self, event: InboundEvent) {
        let conversation_id = event.conversation_id();
        if let Err(e) = self.driver.handle(event).await {
            error!(%conversation_id, error = %e, "Intake event failed");
        }
    }
}

//! Telegram Adapter
//!
//! Connects the dialogue driver to the Telegram Bot API via `teloxide`:
//!
//! - **TelegramGateway** - MessageGateway implementation
//! - **TelegramRunner** - Long-polling dispatcher translating updates into events
//! - `keyboard` / `inbound` - Menu rendering and update translation, both
//!   driven by the configured menu style

mod gateway;
pub mod inbound;
pub mod keyboard;
mod runner;

pub use gateway::TelegramGateway;
pub use runner::{RunnerError, TelegramRunner};

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the dialogue driver to external systems:
//! - `storage` - Conversation store implementations (in-memory)
//! - `gateway` - Transport-neutral gateways (recording, for tests and dry runs)
//! - `telegram` - Telegram Bot API gateway and polling runner

pub mod gateway;
pub mod storage;
pub mod telegram;

pub use gateway::RecordingGateway;
pub use storage::InMemoryConversationStore;
pub use telegram::{TelegramGateway, TelegramRunner};

//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the dialogue driver and the outside world. Adapters implement these ports.
//!
//! - `ConversationStore` - Per-conversation step and collected answers
//! - `MessageGateway` - Outbound delivery of prompts and reports

mod conversation_store;
mod message_gateway;

pub use conversation_store::{ConversationStore, ConversationStoreError};
pub use message_gateway::{GatewayError, MessageGateway};

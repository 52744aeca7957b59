//! Application handlers.
//!
//! Handlers that orchestrate domain operations through the ports.

pub mod dialogue;

pub use dialogue::{ConversationLocks, ConversationScope, DialogueDriver, DialogueError};

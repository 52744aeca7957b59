//! Storage Adapters
//!
//! Implementations of the ConversationStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryConversationStore** - Process-local map; state is lost on restart
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryConversationStore;
//!
//! let store = Arc::new(InMemoryConversationStore::new());
//! let driver = DialogueDriver::new(store, gateway, doctors, policy);
//! ```

mod in_memory_conversation_store;

pub use in_memory_conversation_store::{ConversationRecord, InMemoryConversationStore};

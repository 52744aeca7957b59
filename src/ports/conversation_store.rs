//! Conversation Store Port - Interface for per-conversation form state.
//!
//! The store maps a conversation to its current step and the answers
//! collected so far. An unknown conversation reads as `IntakeState::None`
//! with an empty field set.

use async_trait::async_trait;

use crate::domain::foundation::ConversationId;
use crate::domain::intake::{FieldPatch, FieldSet, IntakeState};

/// Errors that can occur during conversation store operations
#[derive(Debug, thiserror::Error)]
pub enum ConversationStoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store backend error for conversation {conversation_id}: {message}")]
    Backend {
        conversation_id: ConversationId,
        message: String,
    },
}

impl ConversationStoreError {
    pub fn backend(conversation_id: ConversationId, message: impl Into<String>) -> Self {
        Self::Backend {
            conversation_id,
            message: message.into(),
        }
    }
}

/// Port for reading and writing conversation state
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Current step of the conversation; `IntakeState::None` if unknown.
    async fn get_state(&self, id: ConversationId) -> Result<IntakeState, ConversationStoreError>;

    /// Moves the conversation to `state`, creating it if needed.
    async fn set_state(
        &self,
        id: ConversationId,
        state: IntakeState,
    ) -> Result<(), ConversationStoreError>;

    /// Answers collected so far; all-empty if unknown.
    async fn get_fields(&self, id: ConversationId) -> Result<FieldSet, ConversationStoreError>;

    /// Applies a partial update to the answers, creating the conversation if needed.
    async fn update_fields(
        &self,
        id: ConversationId,
        patch: &FieldPatch,
    ) -> Result<(), ConversationStoreError>;

    /// Forgets the conversation: state back to `None`, answers dropped.
    async fn clear(&self, id: ConversationId) -> Result<(), ConversationStoreError>;
}

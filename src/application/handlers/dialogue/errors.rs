//! Dialogue driver error types.

use crate::domain::foundation::ValidationError;
use crate::ports::{ConversationStoreError, GatewayError};

/// Failures while processing one inbound event.
///
/// Invalid user input is never an error: it is answered with a re-prompt.
#[derive(Debug, thiserror::Error)]
pub enum DialogueError {
    /// An outbound message could not be delivered. The conversation stays on
    /// its current step so the user can retry by sending again.
    #[error("Message delivery failed: {0}")]
    Delivery(#[from] GatewayError),

    #[error("Conversation store failed: {0}")]
    Store(#[from] ConversationStoreError),

    #[error("Invalid state transition: {0}")]
    Transition(#[from] ValidationError),
}

impl DialogueError {
    pub fn is_delivery(&self) -> bool {
        matches!(self, Self::Delivery(_))
    }
}

//! Message Gateway Port - Interface for delivering messages to chats.

use async_trait::async_trait;

use crate::domain::foundation::RecipientId;
use crate::domain::intake::OutboundMessage;

/// Errors that can occur while delivering a message
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Delivery to {recipient} failed: {reason}")]
    DeliveryFailed {
        recipient: RecipientId,
        reason: String,
    },

    #[error("Gateway unavailable: {0}")]
    Unavailable(String),
}

impl GatewayError {
    pub fn delivery_failed(recipient: RecipientId, reason: impl Into<String>) -> Self {
        Self::DeliveryFailed {
            recipient,
            reason: reason.into(),
        }
    }
}

/// Port for sending text (with an optional menu) to a chat
#[async_trait]
pub trait MessageGateway: Send + Sync {
    /// Delivers one message.
    ///
    /// # Errors
    /// Returns `GatewayError` if the transport rejects or loses the message.
    async fn send_text(
        &self,
        recipient: RecipientId,
        message: OutboundMessage,
    ) -> Result<(), GatewayError>;
}

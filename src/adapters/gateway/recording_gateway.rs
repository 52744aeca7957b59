//! Recording Message Gateway for testing.
//!
//! Captures every outbound message instead of sending it, and can be told
//! to fail deliveries to chosen recipients.
//!
//! # Example
//!
//! ```ignore
//! let gateway = RecordingGateway::new();
//! gateway.fail_deliveries_to(doctors);
//!
//! let result = driver.handle(event).await;
//! assert!(matches!(result, Err(DialogueError::Delivery(_))));
//! assert!(gateway.sent_to(doctors).is_empty());
//! ```

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::foundation::RecipientId;
use crate::domain::intake::OutboundMessage;
use crate::ports::{GatewayError, MessageGateway};

/// A message captured by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub recipient: RecipientId,
    pub message: OutboundMessage,
}

/// Gateway that records deliveries in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingGateway {
    sent: Arc<Mutex<Vec<SentMessage>>>,
    failing: Arc<Mutex<HashSet<RecipientId>>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every later send to `recipient` fails until restored.
    pub fn fail_deliveries_to(&self, recipient: RecipientId) {
        lock(&self.failing).insert(recipient);
    }

    pub fn restore_deliveries_to(&self, recipient: RecipientId) {
        lock(&self.failing).remove(&recipient);
    }

    /// All delivered messages in send order.
    pub fn sent(&self) -> Vec<SentMessage> {
        lock(&self.sent).clone()
    }

    /// Messages delivered to one recipient, in send order.
    pub fn sent_to(&self, recipient: RecipientId) -> Vec<OutboundMessage> {
        lock(&self.sent)
            .iter()
            .filter(|m| m.recipient == recipient)
            .map(|m| m.message.clone())
            .collect()
    }

    pub fn last_to(&self, recipient: RecipientId) -> Option<OutboundMessage> {
        self.sent_to(recipient).pop()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl MessageGateway for RecordingGateway {
    async fn send_text(
        &self,
        recipient: RecipientId,
        message: OutboundMessage,
    ) -> Result<(), GatewayError> {
        if lock(&self.failing).contains(&recipient) {
            return Err(GatewayError::delivery_failed(
                recipient,
                "delivery disabled for recipient",
            ));
        }
        lock(&self.sent).push(SentMessage { recipient, message });
        Ok(())
    }
}

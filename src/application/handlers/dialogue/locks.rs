//! Per-conversation serialization.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::ConversationId;

/// One async mutex per conversation.
///
/// Events for the same conversation run one after another; different
/// conversations never wait on each other. Slots nobody holds or waits on
/// are dropped on the next acquire.
#[derive(Debug, Default)]
pub struct ConversationLocks {
    slots: Mutex<HashMap<ConversationId, Arc<Mutex<()>>>>,
}

impl ConversationLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other event of `id` is being processed.
    pub async fn acquire(&self, id: ConversationId) -> OwnedMutexGuard<()> {
        let slot = {
            let mut slots = self.slots.lock().await;
            slots.retain(|key, slot| *key == id || Arc::strong_count(slot) > 1);
            Arc::clone(slots.entry(id).or_default())
        };
        slot.lock_owned().await
    }

    /// Number of conversations with a live slot.
    pub async fn len(&self) -> usize {
        self.slots.lock().await.len()
    }
}

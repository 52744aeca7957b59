//! In-Memory Conversation Store Adapter
//!
//! Keeps every conversation in a process-local map. Nothing survives a
//! restart; a user mid-form simply gets the welcome prompt again.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::ConversationId;
use crate::domain::intake::{FieldPatch, FieldSet, IntakeState};
use crate::ports::{ConversationStore, ConversationStoreError};

/// Stored form of one conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationRecord {
    pub state: IntakeState,
    pub fields: FieldSet,
}

/// In-memory storage for conversation state
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationStore {
    conversations: Arc<RwLock<HashMap<ConversationId, ConversationRecord>>>,
}

impl InMemoryConversationStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of one conversation, if it exists
    pub async fn record(&self, id: ConversationId) -> Option<ConversationRecord> {
        self.conversations.read().await.get(&id).cloned()
    }

    /// Number of conversations currently held
    pub async fn conversation_count(&self) -> usize {
        self.conversations.read().await.len()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn get_state(&self, id: ConversationId) -> Result<IntakeState, ConversationStoreError> {
        let conversations = self.conversations.read().await;
        Ok(conversations
            .get(&id)
            .map(|record| record.state)
            .unwrap_or_default())
    }

    async fn set_state(
        &self,
        id: ConversationId,
        state: IntakeState,
    ) -> Result<(), ConversationStoreError> {
        let mut conversations = self.conversations.write().await;
        let record = conversations.entry(id).or_default();
        record.state = state;
        Ok(())
    }

    async fn get_fields(&self, id: ConversationId) -> Result<FieldSet, ConversationStoreError> {
        let conversations = self.conversations.read().await;
        Ok(conversations
            .get(&id)
            .map(|record| record.fields.clone())
            .unwrap_or_default())
    }

    async fn update_fields(
        &self,
        id: ConversationId,
        patch: &FieldPatch,
    ) -> Result<(), ConversationStoreError> {
        if patch.is_empty() {
            return Ok(());
        }
        let mut conversations = self.conversations.write().await;
        let record = conversations.entry(id).or_default();
        record.fields.apply(patch);
        Ok(())
    }

    async fn clear(&self, id: ConversationId) -> Result<(), ConversationStoreError> {
        self.conversations.write().await.remove(&id);
        Ok(())
    }
}

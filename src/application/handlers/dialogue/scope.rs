//! Scoped read-modify-write access to one conversation.

use crate::domain::foundation::ConversationId;
use crate::domain::intake::{Field, FieldPatch, FieldSet, IntakeState};
use crate::ports::{ConversationStore, ConversationStoreError};

/// A working copy of one conversation.
///
/// Opened at the start of an event, mutated by the step handler and written
/// back once. Field changes are collected as a [`FieldPatch`] so only what
/// the step touched reaches the store.
#[derive(Debug)]
pub struct ConversationScope {
    conversation_id: ConversationId,
    state: IntakeState,
    fields: FieldSet,
    patch: FieldPatch,
}

impl ConversationScope {
    pub async fn open(
        store: &dyn ConversationStore,
        conversation_id: ConversationId,
    ) -> Result<Self, ConversationStoreError> {
        let state = store.get_state(conversation_id).await?;
        let fields = store.get_fields(conversation_id).await?;
        Ok(Self {
            conversation_id,
            state,
            fields,
            patch: FieldPatch::new(),
        })
    }

    pub fn conversation_id(&self) -> ConversationId {
        self.conversation_id
    }

    /// Step the conversation was on when the scope was opened.
    pub fn state(&self) -> IntakeState {
        self.state
    }

    /// Answers including changes made through this scope.
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.fields.set(field, value.as_str());
        self.patch.set(field, value);
    }

    pub fn is_dirty(&self) -> bool {
        !self.patch.is_empty()
    }

    /// Writes the collected field changes. A scope with no changes writes nothing.
    pub async fn write_back(
        self,
        store: &dyn ConversationStore,
    ) -> Result<(), ConversationStoreError> {
        if !self.is_dirty() {
            return Ok(());
        }
        store.update_fields(self.conversation_id, &self.patch).await
    }
}

//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the state machine trait and the
//! validation error used across the intake domain.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::{ConversationId, EventId, RecipientId};
pub use state_machine::StateMachine;

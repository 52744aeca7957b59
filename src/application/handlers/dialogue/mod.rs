//! Dialogue handlers - The intake form state machine.
//!
//! Every inbound event runs through [`DialogueDriver::handle`], which
//! serializes events per conversation, applies the step for the current
//! state and persists the result.

mod driver;
mod errors;
mod locks;
mod scope;

pub use driver::DialogueDriver;
pub use errors::DialogueError;
pub use locks::ConversationLocks;
pub use scope::ConversationScope;

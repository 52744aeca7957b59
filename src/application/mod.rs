//! Application layer - Handlers driving the intake form.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{DialogueDriver, DialogueError};

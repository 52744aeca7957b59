//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, state machine trait, errors)
//! - `intake` - The help-request form: steps, answers, menus, prompts and the doctors' report

pub mod foundation;
pub mod intake;

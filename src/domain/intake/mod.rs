//! Intake domain module.
//!
//! The vocabulary of the help-request form: its steps, the answers it
//! collects, the menus it offers, its prompt texts and the report sent to
//! the doctors.

mod event;
mod fields;
pub mod menu;
mod outbound;
mod policy;
pub mod prompts;
mod state;
pub mod summary;

pub use event::{InboundEvent, Payload};
pub use fields::{Field, FieldPatch, FieldSet};
pub use menu::{MenuOption, MenuSpec, MenuToken};
pub use outbound::{MenuAttachment, OutboundMessage, TextFormat};
pub use policy::SubmissionPolicy;
pub use state::IntakeState;
pub use summary::{compose, compose_for_review};

//! What happens once the last question is answered.

use serde::Deserialize;
use std::fmt;

/// Whether the submitter reviews the report before it goes to the doctors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPolicy {
    /// Deliver right after the comments step.
    #[default]
    Immediate,
    /// Show the report with "send" / "do not send" and wait in `Approve`.
    #[serde(alias = "confirm_first")]
    Confirm,
}

impl SubmissionPolicy {
    pub fn requires_approval(&self) -> bool {
        matches!(self, Self::Confirm)
    }
}

impl fmt::Display for SubmissionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate => f.write_str("immediate"),
            Self::Confirm => f.write_str("confirm"),
        }
    }
}

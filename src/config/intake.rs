//! Intake form configuration

use serde::Deserialize;

use crate::domain::intake::SubmissionPolicy;

/// Intake form behaviour
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntakeConfig {
    /// Whether completed forms go straight to the doctors or wait for approval
    #[serde(default)]
    pub submission: SubmissionPolicy,
}

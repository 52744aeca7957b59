//! Intake form state machine.
//!
//! Defines the steps of the form and the moves allowed between them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::fields::Field;
use crate::domain::foundation::StateMachine;

/// The step a conversation is currently on.
///
/// The form runs `None -> Initial -> [GoodManName] -> VictimName -> Age ->
/// InjuryDate -> InjuryList -> Location -> Contact -> Questions -> [Approve]`
/// and then returns to `None`. Every active step may also fall back to
/// `None` when the conversation is cancelled or cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntakeState {
    /// No conversation in progress.
    #[default]
    None,

    /// Welcome shown, waiting for "help myself" / "help someone else".
    Initial,

    /// Asking the name of the person filing for someone else.
    GoodManName,

    VictimName,
    Age,
    InjuryDate,
    InjuryList,
    Location,
    Contact,

    /// Optional comments; a "skip" button is offered.
    Questions,

    /// Summary shown, waiting for "send" / "do not send".
    Approve,
}

impl IntakeState {
    pub const ALL: [IntakeState; 11] = [
        IntakeState::None,
        IntakeState::Initial,
        IntakeState::GoodManName,
        IntakeState::VictimName,
        IntakeState::Age,
        IntakeState::InjuryDate,
        IntakeState::InjuryList,
        IntakeState::Location,
        IntakeState::Contact,
        IntakeState::Questions,
        IntakeState::Approve,
    ];

    /// Returns true while a form is being filled.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// The field a free-text answer is stored in while on this step.
    pub fn answer_field(&self) -> Option<Field> {
        match self {
            Self::GoodManName => Some(Field::RequesterName),
            Self::VictimName => Some(Field::VictimName),
            Self::Age => Some(Field::AgeOrBirthdate),
            Self::InjuryDate => Some(Field::InjuryDate),
            Self::InjuryList => Some(Field::InjuryList),
            Self::Location => Some(Field::Location),
            Self::Contact => Some(Field::ContactMethod),
            Self::Questions => Some(Field::Comments),
            Self::None | Self::Initial | Self::Approve => None,
        }
    }

    /// The question that follows an answered step.
    ///
    /// `Questions` has no fixed follow-up: what happens next depends on the
    /// submission policy.
    pub fn next_question(&self) -> Option<IntakeState> {
        match self {
            Self::GoodManName => Some(Self::VictimName),
            Self::VictimName => Some(Self::Age),
            Self::Age => Some(Self::InjuryDate),
            Self::InjuryDate => Some(Self::InjuryList),
            Self::InjuryList => Some(Self::Location),
            Self::Location => Some(Self::Contact),
            Self::Contact => Some(Self::Questions),
            _ => None,
        }
    }

    /// Stable snake_case name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Initial => "initial",
            Self::GoodManName => "good_man_name",
            Self::VictimName => "victim_name",
            Self::Age => "age",
            Self::InjuryDate => "injury_date",
            Self::InjuryList => "injury_list",
            Self::Location => "location",
            Self::Contact => "contact",
            Self::Questions => "questions",
            Self::Approve => "approve",
        }
    }
}

impl fmt::Display for IntakeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl StateMachine for IntakeState {
    fn successors(&self) -> &'static [Self] {
        use IntakeState::*;
        match self {
            None => &[Initial],
            Initial => &[GoodManName, VictimName, None],
            GoodManName => &[VictimName, None],
            VictimName => &[Age, None],
            Age => &[InjuryDate, None],
            InjuryDate => &[InjuryList, None],
            InjuryList => &[Location, None],
            Location => &[Contact, None],
            Contact => &[Questions, None],
            // Questions either submits (back to None) or asks for approval
            Questions => &[Approve, None],
            Approve => &[None],
        }
    }
}

//! Answers collected by the intake form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One answer slot of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Name of the person filing on someone else's behalf.
    RequesterName,
    VictimName,
    AgeOrBirthdate,
    InjuryDate,
    InjuryList,
    Location,
    ContactMethod,
    /// Free-form question or comment for the doctors.
    Comments,
}

impl Field {
    /// All fields in report order.
    pub const ALL: [Field; 8] = [
        Field::RequesterName,
        Field::VictimName,
        Field::AgeOrBirthdate,
        Field::InjuryDate,
        Field::InjuryList,
        Field::Location,
        Field::ContactMethod,
        Field::Comments,
    ];

    /// Fields every submitted request must carry.
    pub const REQUIRED: [Field; 6] = [
        Field::VictimName,
        Field::AgeOrBirthdate,
        Field::InjuryDate,
        Field::InjuryList,
        Field::Location,
        Field::ContactMethod,
    ];

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// Stable snake_case name, used in logs and storage.
    pub fn name(&self) -> &'static str {
        match self {
            Field::RequesterName => "requester_name",
            Field::VictimName => "victim_name",
            Field::AgeOrBirthdate => "age_or_birthdate",
            Field::InjuryDate => "injury_date",
            Field::InjuryList => "injury_list",
            Field::Location => "location",
            Field::ContactMethod => "contact_method",
            Field::Comments => "comments",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The answers of one conversation. Unanswered fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSet {
    pub requester_name: String,
    pub victim_name: String,
    pub age_or_birthdate: String,
    pub injury_date: String,
    pub injury_list: String,
    pub location: String,
    pub contact_method: String,
    pub comments: String,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::RequesterName => &self.requester_name,
            Field::VictimName => &self.victim_name,
            Field::AgeOrBirthdate => &self.age_or_birthdate,
            Field::InjuryDate => &self.injury_date,
            Field::InjuryList => &self.injury_list,
            Field::Location => &self.location,
            Field::ContactMethod => &self.contact_method,
            Field::Comments => &self.comments,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::RequesterName => &mut self.requester_name,
            Field::VictimName => &mut self.victim_name,
            Field::AgeOrBirthdate => &mut self.age_or_birthdate,
            Field::InjuryDate => &mut self.injury_date,
            Field::InjuryList => &mut self.injury_list,
            Field::Location => &mut self.location,
            Field::ContactMethod => &mut self.contact_method,
            Field::Comments => &mut self.comments,
        };
        *slot = value.into();
    }

    /// Applies the assignments of a patch in order.
    pub fn apply(&mut self, patch: &FieldPatch) {
        for (field, value) in patch.iter() {
            self.set(*field, value.as_str());
        }
    }

    /// Required fields that are still empty, in report order.
    pub fn missing_required(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| field.is_required() && self.get(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// True when nothing has been answered yet.
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// An ordered list of field assignments, written back to the store as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPatch {
    assignments: Vec<(Field, String)>,
}

impl FieldPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FieldPatch::set`].
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Records an assignment. A later assignment to the same field wins.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match self.assignments.iter_mut().find(|(f, _)| *f == field) {
            Some((_, existing)) => *existing = value,
            None => self.assignments.push((field, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, String)> {
        self.assignments.iter()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

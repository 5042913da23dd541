//! Accident record - one entry in the club accident book.

use crate::{
    CoreError, MAX_ACTION_TAKEN_LENGTH, MAX_AGE, MAX_LOCATION_LENGTH, MAX_NATURE_OF_INJURY_LENGTH,
    MAX_OPPOSITION_LENGTH, MAX_PERSON_LENGTH, MAX_TREATMENT_LENGTH, MAX_WITNESSES_LENGTH, MIN_AGE,
    Result as CoreErrorResult,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accident {
    pub id: i64,
    pub date_of_accident: DateTime<Utc>,
    pub time_of_accident: DateTime<Utc>,
    pub location: String,
    pub opposition: String,
    pub person_involved: String,
    pub age: Option<i32>,
    pub person_reporting: String,
    pub description: String,
    pub nature_of_injury: String,
    pub treatment_given: String,
    pub action_taken: String,
    pub witnesses: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Writable fields of an accident record, as submitted on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccidentInput {
    pub date_of_accident: DateTime<Utc>,
    pub time_of_accident: DateTime<Utc>,
    pub location: String,
    pub opposition: String,
    pub person_involved: String,
    pub age: Option<i32>,
    pub person_reporting: String,
    pub description: String,
    pub nature_of_injury: String,
    pub treatment_given: String,
    pub action_taken: String,
    pub witnesses: String,
}

impl AccidentInput {
    /// Check required fields and column limits. Reports the first failing field.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        required("location", &self.location, MAX_LOCATION_LENGTH)?;
        optional("opposition", &self.opposition, MAX_OPPOSITION_LENGTH)?;
        required("person_involved", &self.person_involved, MAX_PERSON_LENGTH)?;

        if let Some(age) = self.age
            && !(MIN_AGE..=MAX_AGE).contains(&age)
        {
            return Err(CoreError::validation(
                "age",
                format!("age must be between {MIN_AGE} and {MAX_AGE}, got {age}"),
            ));
        }

        required("person_reporting", &self.person_reporting, MAX_PERSON_LENGTH)?;
        required("description", &self.description, usize::MAX)?;
        optional(
            "nature_of_injury",
            &self.nature_of_injury,
            MAX_NATURE_OF_INJURY_LENGTH,
        )?;
        optional("treatment_given", &self.treatment_given, MAX_TREATMENT_LENGTH)?;
        optional("action_taken", &self.action_taken, MAX_ACTION_TAKEN_LENGTH)?;
        optional("witnesses", &self.witnesses, MAX_WITNESSES_LENGTH)?;

        Ok(())
    }
}

impl Accident {
    /// Build a record from validated input. The id is assigned by the store.
    pub fn from_input(input: AccidentInput) -> Self {
        Self {
            id: 0,
            date_of_accident: input.date_of_accident,
            time_of_accident: input.time_of_accident,
            location: input.location,
            opposition: input.opposition,
            person_involved: input.person_involved,
            age: input.age,
            person_reporting: input.person_reporting,
            description: input.description,
            nature_of_injury: input.nature_of_injury,
            treatment_given: input.treatment_given,
            action_taken: input.action_taken,
            witnesses: input.witnesses,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overwrite every writable field and stamp `updated_at`
    pub fn apply(&mut self, input: AccidentInput, at: DateTime<Utc>) {
        self.date_of_accident = input.date_of_accident;
        self.time_of_accident = input.time_of_accident;
        self.location = input.location;
        self.opposition = input.opposition;
        self.person_involved = input.person_involved;
        self.age = input.age;
        self.person_reporting = input.person_reporting;
        self.description = input.description;
        self.nature_of_injury = input.nature_of_injury;
        self.treatment_given = input.treatment_given;
        self.action_taken = input.action_taken;
        self.witnesses = input.witnesses;
        self.updated_at = Some(at);
    }
}

#[track_caller]
fn required(field: &'static str, value: &str, max: usize) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, format!("{field} is required")));
    }
    optional(field, value, max)
}

#[track_caller]
fn optional(field: &'static str, value: &str, max: usize) -> CoreErrorResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::validation(
            field,
            format!("{field} must be at most {max} characters, got {len}"),
        ));
    }
    Ok(())
}

use ab_core::AccidentInput;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Body of create and update requests. Optional text fields default to empty.
///
/// `id`, `createdAt` and `updatedAt` sent by the client are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccidentRequest {
    pub date_of_accident: DateTime<Utc>,
    pub time_of_accident: DateTime<Utc>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub opposition: String,
    #[serde(default)]
    pub person_involved: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub person_reporting: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub nature_of_injury: String,
    #[serde(default)]
    pub treatment_given: String,
    #[serde(default)]
    pub action_taken: String,
    #[serde(default)]
    pub witnesses: String,
}

impl From<AccidentRequest> for AccidentInput {
    fn from(r: AccidentRequest) -> Self {
        Self {
            date_of_accident: r.date_of_accident,
            time_of_accident: r.time_of_accident,
            location: r.location,
            opposition: r.opposition,
            person_involved: r.person_involved,
            age: r.age,
            person_reporting: r.person_reporting,
            description: r.description,
            nature_of_injury: r.nature_of_injury,
            treatment_given: r.treatment_given,
            action_taken: r.action_taken,
            witnesses: r.witnesses,
        }
    }
}

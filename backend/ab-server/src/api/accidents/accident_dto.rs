use ab_core::Accident;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Accident record as served to the browser client
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccidentDto {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Accident> for AccidentDto {
    fn from(a: Accident) -> Self {
        Self {
            id: a.id,
            date_of_accident: a.date_of_accident,
            time_of_accident: a.time_of_accident,
            location: a.location,
            opposition: a.opposition,
            person_involved: a.person_involved,
            age: a.age,
            person_reporting: a.person_reporting,
            description: a.description,
            nature_of_injury: a.nature_of_injury,
            treatment_given: a.treatment_given,
            action_taken: a.action_taken,
            witnesses: a.witnesses,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

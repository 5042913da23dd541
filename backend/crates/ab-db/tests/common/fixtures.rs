#![allow(dead_code)]

use ab_core::{Accident, AccidentInput, UserIdentity};

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Creates a password identity with derived email
pub fn create_test_user(username: &str) -> UserIdentity {
    UserIdentity::with_password(
        username.to_string(),
        format!("{}@example.com", username),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        Some(format!("{} Test", username)),
    )
}

/// Creates a Google-only identity
pub fn create_google_user(username: &str, google_id: &str) -> UserIdentity {
    UserIdentity::with_google_id(
        username.to_string(),
        format!("{}@gmail.com", username),
        google_id.to_string(),
        None,
    )
}

pub fn match_day() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 14, 15, 0, 0).unwrap()
}

/// Creates accident input occurring `hours_after` the reference match day kickoff
pub fn create_test_input(hours_after: i64) -> AccidentInput {
    let at = match_day() + Duration::hours(hours_after);
    AccidentInput {
        date_of_accident: at,
        time_of_accident: at,
        location: "Ashbrooke".to_string(),
        opposition: "Durham City".to_string(),
        person_involved: "Sam Taylor".to_string(),
        age: Some(14),
        person_reporting: "Coach Jones".to_string(),
        description: "Collision in a tackle".to_string(),
        nature_of_injury: "Bruised shoulder".to_string(),
        treatment_given: "Ice pack".to_string(),
        action_taken: "Substituted".to_string(),
        witnesses: "Referee".to_string(),
    }
}

pub fn create_test_accident(hours_after: i64) -> Accident {
    Accident::from_input(create_test_input(hours_after))
}

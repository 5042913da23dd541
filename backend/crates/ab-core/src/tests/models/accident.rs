use crate::{Accident, AccidentInput, CoreError};

use chrono::{Duration, TimeZone, Utc};
use googletest::prelude::*;

fn valid_input() -> AccidentInput {
    let at = Utc.with_ymd_and_hms(2024, 9, 14, 15, 30, 0).unwrap();
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

fn failing_field(input: &AccidentInput) -> Option<&'static str> {
    match input.validate() {
        Err(CoreError::Validation { field, .. }) => Some(field),
        _ => None,
    }
}

#[test]
fn given_complete_input_when_validated_then_ok() {
    assert_that!(valid_input().validate(), ok(anything()));
}

#[test]
fn given_optional_fields_empty_when_validated_then_ok() {
    let mut input = valid_input();
    input.opposition.clear();
    input.age = None;
    input.nature_of_injury.clear();
    input.treatment_given.clear();
    input.action_taken.clear();
    input.witnesses.clear();

    assert_that!(input.validate(), ok(anything()));
}

#[test]
fn given_blank_location_when_validated_then_location_reported() {
    let mut input = valid_input();
    input.location = "   ".to_string();

    assert_that!(failing_field(&input), some(eq("location")));
}

#[test]
fn given_several_invalid_fields_when_validated_then_first_is_reported() {
    let mut input = valid_input();
    input.person_involved.clear();
    input.description.clear();

    assert_that!(failing_field(&input), some(eq("person_involved")));
}

#[test]
fn given_age_outside_youth_range_when_validated_then_age_reported() {
    let mut input = valid_input();
    input.age = Some(18);
    assert_that!(failing_field(&input), some(eq("age")));

    input.age = Some(0);
    assert_that!(failing_field(&input), some(eq("age")));
}

#[test]
fn given_witnesses_over_limit_when_validated_then_witnesses_reported() {
    let mut input = valid_input();
    input.witnesses = "w".repeat(crate::MAX_WITNESSES_LENGTH + 1);

    assert_that!(failing_field(&input), some(eq("witnesses")));
}

#[test]
fn given_location_at_limit_when_validated_then_ok() {
    let mut input = valid_input();
    input.location = "l".repeat(crate::MAX_LOCATION_LENGTH);

    assert_that!(input.validate(), ok(anything()));
}

#[test]
fn given_record_when_input_applied_then_fields_replaced_and_updated_at_set() {
    let mut accident = Accident::from_input(valid_input());
    let created_at = accident.created_at;
    assert_that!(accident.updated_at, none());

    let mut changed = valid_input();
    changed.location = "Away ground".to_string();
    changed.age = None;
    let at = created_at + Duration::minutes(5);

    accident.apply(changed, at);

    assert_that!(accident.location, eq("Away ground"));
    assert_that!(accident.age, none());
    assert_that!(accident.created_at, eq(created_at));
    assert_that!(accident.updated_at, some(eq(at)));
}

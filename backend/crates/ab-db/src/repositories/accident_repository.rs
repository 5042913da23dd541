use crate::repositories::to_millis;
use crate::{DbError, Result as DbErrorResult};

use ab_core::{Accident, ErrorLocation};

use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct AccidentRow {
    id: i64,
    date_of_accident: i64,
    time_of_accident: i64,
    location: String,
    opposition: String,
    person_involved: String,
    age: Option<i32>,
    person_reporting: String,
    description: String,
    nature_of_injury: String,
    treatment_given: String,
    action_taken: String,
    witnesses: String,
    created_at: i64,
    updated_at: Option<i64>,
}

impl TryFrom<AccidentRow> for Accident {
    type Error = DbError;

    fn try_from(r: AccidentRow) -> DbErrorResult<Self> {
        Ok(Accident {
            id: r.id,
            date_of_accident: timestamp(r.id, "date_of_accident", r.date_of_accident)?,
            time_of_accident: timestamp(r.id, "time_of_accident", r.time_of_accident)?,
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
            created_at: timestamp(r.id, "created_at", r.created_at)?,
            updated_at: r
                .updated_at
                .map(|ms| timestamp(r.id, "updated_at", ms))
                .transpose()?,
        })
    }
}

#[track_caller]
fn timestamp(id: i64, column: &str, millis: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::CorruptRow {
        table: "accidents",
        message: format!("accident {id}: {column} {millis} out of range"),
        location: ErrorLocation::from(Location::caller()),
    })
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, date_of_accident, time_of_accident, location, opposition,
           person_involved, age, person_reporting, description,
           nature_of_injury, treatment_given, action_taken, witnesses,
           created_at, updated_at
    FROM accidents
"#;

pub struct AccidentRepository {
    pool: SqlitePool,
}

impl AccidentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new record and return its assigned id. `accident.id` is ignored.
    pub async fn create(&self, accident: &Accident) -> DbErrorResult<i64> {
        let result = sqlx::query(
            r#"
              INSERT INTO accidents (
                  date_of_accident, time_of_accident, location, opposition,
                  person_involved, age, person_reporting, description,
                  nature_of_injury, treatment_given, action_taken, witnesses,
                  created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(to_millis(accident.date_of_accident))
        .bind(to_millis(accident.time_of_accident))
        .bind(&accident.location)
        .bind(&accident.opposition)
        .bind(&accident.person_involved)
        .bind(accident.age)
        .bind(&accident.person_reporting)
        .bind(&accident.description)
        .bind(&accident.nature_of_injury)
        .bind(&accident.treatment_given)
        .bind(&accident.action_taken)
        .bind(&accident.witnesses)
        .bind(to_millis(accident.created_at))
        .bind(accident.updated_at.map(to_millis))
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Accident>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?");

        let row = sqlx::query_as::<_, AccidentRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Accident::try_from).transpose()
    }

    /// All records, most recent incident first
    pub async fn find_all(&self) -> DbErrorResult<Vec<Accident>> {
        let sql = format!(
            "{SELECT_COLUMNS} ORDER BY date_of_accident DESC, time_of_accident DESC, id DESC"
        );

        let rows = sqlx::query_as::<_, AccidentRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Accident::try_from).collect()
    }

    /// Overwrite every writable column. Returns false when the id does not exist.
    pub async fn update(&self, accident: &Accident) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE accidents
              SET date_of_accident = ?, time_of_accident = ?, location = ?,
                  opposition = ?, person_involved = ?, age = ?,
                  person_reporting = ?, description = ?, nature_of_injury = ?,
                  treatment_given = ?, action_taken = ?, witnesses = ?,
                  updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(to_millis(accident.date_of_accident))
        .bind(to_millis(accident.time_of_accident))
        .bind(&accident.location)
        .bind(&accident.opposition)
        .bind(&accident.person_involved)
        .bind(accident.age)
        .bind(&accident.person_reporting)
        .bind(&accident.description)
        .bind(&accident.nature_of_injury)
        .bind(&accident.treatment_given)
        .bind(&accident.action_taken)
        .bind(&accident.witnesses)
        .bind(accident.updated_at.map(to_millis))
        .bind(accident.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Returns false when the id does not exist.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM accidents WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

use crate::repositories::to_millis;
use crate::{DbError, Result as DbErrorResult};

use ab_core::{CredentialStore, ErrorLocation, StoreError, StoreResult, UniqueField, UserIdentity};

use std::panic::Location;

use async_trait::async_trait;
use chrono::DateTime;
use sqlx::SqlitePool;
use uuid::Uuid;

const SELECT_COLUMNS: &str = r#"
    SELECT id, username, email, password_hash, google_id, full_name,
           is_active, created_at, last_login_at
    FROM users
"#;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    username: String,
    email: String,
    password_hash: Option<String>,
    google_id: Option<String>,
    full_name: Option<String>,
    is_active: bool,
    created_at: i64,
    last_login_at: Option<i64>,
}

impl TryFrom<UserRow> for UserIdentity {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        let corrupt = |message: String| DbError::CorruptRow {
            table: "users",
            message,
            location: ErrorLocation::from(Location::caller()),
        };

        let id = Uuid::parse_str(&r.id).map_err(|e| corrupt(format!("id '{}': {}", r.id, e)))?;
        let created_at = DateTime::from_timestamp_millis(r.created_at)
            .ok_or_else(|| corrupt(format!("created_at {} out of range", r.created_at)))?;
        let last_login_at = r
            .last_login_at
            .map(|ms| {
                DateTime::from_timestamp_millis(ms)
                    .ok_or_else(|| corrupt(format!("last_login_at {ms} out of range")))
            })
            .transpose()?;

        Ok(UserIdentity {
            id,
            username: r.username,
            email: r.email,
            password_hash: r.password_hash,
            google_id: r.google_id,
            full_name: r.full_name,
            is_active: r.is_active,
            created_at,
            last_login_at,
        })
    }
}

/// SQLite-backed identity table
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, identity: &UserIdentity) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (
                  id, username, email, password_hash, google_id, full_name,
                  is_active, created_at, last_login_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(identity.id.to_string())
        .bind(&identity.username)
        .bind(&identity.email)
        .bind(&identity.password_hash)
        .bind(&identity.google_id)
        .bind(&identity.full_name)
        .bind(identity.is_active)
        .bind(to_millis(identity.created_at))
        .bind(identity.last_login_at.map(to_millis))
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    /// Write all mutable columns. Returns false when no row has this id.
    pub async fn save(&self, identity: &UserIdentity) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE users
              SET username = ?, email = ?, password_hash = ?, google_id = ?,
                  full_name = ?, is_active = ?, last_login_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&identity.username)
        .bind(&identity.email)
        .bind(&identity.password_hash)
        .bind(&identity.google_id)
        .bind(&identity.full_name)
        .bind(identity.is_active)
        .bind(identity.last_login_at.map(to_millis))
        .bind(identity.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserIdentity>> {
        self.find_one("id", &id.to_string()).await
    }

    async fn find_one(&self, column: &str, value: &str) -> DbErrorResult<Option<UserIdentity>> {
        // `column` is always one of our own literals, never user input
        let sql = format!("{SELECT_COLUMNS} WHERE {column} = ?");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserIdentity::try_from).transpose()
    }

    async fn exists(&self, column: &str, value: &str) -> DbErrorResult<bool> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM users WHERE {column} = ?)");

        let exists: i64 = sqlx::query_scalar(&sql)
            .bind(value)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists != 0)
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<UserIdentity>> {
        Ok(self.find_one("username", username).await?)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserIdentity>> {
        Ok(self.find_one("email", email).await?)
    }

    async fn find_by_google_id(&self, google_id: &str) -> StoreResult<Option<UserIdentity>> {
        Ok(self.find_one("google_id", google_id).await?)
    }

    async fn exists_by_username(&self, username: &str) -> StoreResult<bool> {
        Ok(self.exists("username", username).await?)
    }

    async fn exists_by_email(&self, email: &str) -> StoreResult<bool> {
        Ok(self.exists("email", email).await?)
    }

    async fn insert(&self, identity: &UserIdentity) -> StoreResult<()> {
        Ok(self.create(identity).await?)
    }

    async fn update(&self, identity: &UserIdentity) -> StoreResult<()> {
        if self.save(identity).await? {
            Ok(())
        } else {
            Err(StoreError::NotFound {
                id: identity.id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

/// Turn SQLite unique-index failures into a typed conflict naming the column
#[track_caller]
fn map_write_error(e: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        // SQLite reports "UNIQUE constraint failed: users.<column>"
        let message = db_err.message();
        let field = if message.contains("users.username") {
            Some(UniqueField::Username)
        } else if message.contains("users.email") {
            Some(UniqueField::Email)
        } else if message.contains("users.google_id") {
            Some(UniqueField::GoogleId)
        } else {
            None
        };

        if let Some(field) = field {
            return DbError::UniqueViolation {
                field,
                location: ErrorLocation::from(Location::caller()),
            };
        }
    }

    DbError::from(e)
}

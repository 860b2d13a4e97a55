//! User repository and the read-only store seam the validator depends on

use async_trait::async_trait;
use sqlx::PgPool;
use tertulia_common::{Error, Result};

use crate::domain::entities::{User, UserPayload};

/// Columns returned by every user SELECT. The password column stays out.
const USER_COLUMNS: &str =
    "id, username, email, first_name, last_name, profile_picture, status_id, role_id";

/// Read-only lookups the validator needs. Kept as a trait so validation logic
/// can be exercised against an in-memory store in tests.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn username_exists(&self, username: &str) -> Result<bool>;
    async fn email_exists(&self, email: &str) -> Result<bool>;
}

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user. The generated id is returned.
    ///
    /// The storage-level UNIQUE constraints are the authoritative backstop
    /// for the validator's pre-checks; a violation here still reports as a
    /// per-field validation message.
    pub async fn create(&self, user: &UserPayload) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users \
             (username, email, password, first_name, last_name, profile_picture, status_id, role_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.profile_picture)
        .bind(user.status_id)
        .bind(user.role_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(id)
    }

    /// Full-field replace of a user keyed by id. Password is not touched.
    pub async fn update(&self, id: i64, user: &UserPayload) -> Result<()> {
        sqlx::query(
            "UPDATE users SET username = $2, email = $3, first_name = $4, last_name = $5, \
             profile_picture = $6, status_id = $7, role_id = $8, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.profile_picture)
        .bind(user.status_id)
        .bind(user.role_id)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn username_exists(&self, username: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = $1")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn email_exists(&self, email: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}

/// Translate a uniqueness-constraint violation into the per-field message the
/// pre-check would have produced.
fn map_unique_violation(err: sqlx::Error) -> Error {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return match db.constraint() {
                Some("users_username_key") => Error::bad_request("username is already taken"),
                Some("users_email_key") => {
                    Error::bad_request("an account with the given email already exists")
                }
                _ => Error::bad_request("a value supplied for a unique field is already taken"),
            };
        }
    }
    err.into()
}

//! User repository
//!
//! Lookups come in two flavors: `get_*` returns `DbError::NotFound` for a
//! missing row, `find_*` is fail-soft and returns `None` on any failure.

use sqlx::PgPool;
use tracing::instrument;

use crate::error::{fail_soft, DbError};
use crate::models::{Email, NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by email (compared lowercased).
    #[instrument(skip_all)]
    pub async fn get_by_email(&self, email: &Email) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT *
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("user", email.as_str()))
    }

    /// Get a user by ID.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT *
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("user", id))
    }

    /// Fail-soft lookup by raw email input.
    ///
    /// Input that is not an email address matches nobody; no query runs.
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let email = match Email::new(email) {
            Ok(email) => email,
            Err(err) => {
                tracing::debug!(%err, "not an email address, skipping lookup");
                return None;
            }
        };
        fail_soft("find user by email", self.get_by_email(&email).await)
    }

    /// Fail-soft lookup by ID.
    pub async fn find_by_id(&self, id: i32) -> Option<User> {
        fail_soft("find user by id", self.get_by_id(id).await)
    }

    /// Insert a user and return the stored row.
    ///
    /// The password must already be hashed by the caller.
    #[instrument(skip_all)]
    pub async fn add(&self, user: NewUser) -> Result<User, DbError> {
        let stored: User = sqlx::query_as(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user.name())
        .bind(user.email().as_str())
        .bind(user.password())
        .fetch_one(self.pool)
        .await?;

        tracing::info!(user_id = stored.id, "user added");
        Ok(stored)
    }
}

//! User repository for database operations
//!
//! Exclusive owner of account rows: create and lookup only, no in-place
//! credential rotation. Email uniqueness rides the unique index on
//! `users.email`, so two concurrent registrations for the same email
//! resolve to one inserted row and one unique-violation error.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// User record from database
///
/// Internal to the repository/service layer; responses use the public
/// projection from [`crate::types::UserProfile`] instead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a new user
    ///
    /// Returns the unique-violation database error unchanged when the
    /// email is already registered; the service layer maps it to the
    /// duplicate-email kind. No partial state on failure: this is a
    /// single INSERT.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List all users, oldest first
    pub async fn list(pool: &PgPool) -> Result<Vec<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await
    }
}

//! Problem report repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Report record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReportRecord {
    pub id: i64,
    pub problem: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<i64>,
}

/// Report repository for database operations
pub struct ReportRepository;

impl ReportRepository {
    /// Insert a new report
    ///
    /// Reports are accepted without authentication, so the user id is
    /// optional.
    pub async fn create(
        pool: &PgPool,
        problem: &str,
        user_id: Option<i64>,
    ) -> Result<ReportRecord, sqlx::Error> {
        sqlx::query_as::<_, ReportRecord>(
            r#"
            INSERT INTO reports (problem, user_id)
            VALUES ($1, $2)
            RETURNING id, problem, created_at, user_id
            "#,
        )
        .bind(problem)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    // Covered by tests/posts_integration_test.rs against a real database.
}

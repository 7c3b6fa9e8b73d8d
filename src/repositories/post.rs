//! Post repository for database operations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Post row joined with its author's public columns
///
/// Author columns are null when the user row has been removed; the
/// post survives with an absent author.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostWithAuthor {
    pub id: i64,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub likes: i32,
    pub comments: i32,
    pub user_id: i64,
    pub author_email: Option<String>,
    pub author_created_at: Option<DateTime<Utc>>,
}

const SELECT_WITH_AUTHOR: &str = r#"
    SELECT p.id, p.content, p.image_url, p.created_at, p.likes, p.comments,
           p.user_id, u.email AS author_email, u.created_at AS author_created_at
    FROM posts p
    LEFT JOIN users u ON u.id = p.user_id
"#;

/// Post repository for database operations
pub struct PostRepository;

impl PostRepository {
    /// Insert a new post for a user
    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        content: &str,
        image_url: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO posts (content, image_url, user_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(content)
        .bind(image_url)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// List all posts, newest first, with author projections
    pub async fn list_recent(pool: &PgPool) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, PostWithAuthor>(&format!(
            "{SELECT_WITH_AUTHOR} ORDER BY p.created_at DESC"
        ))
        .fetch_all(pool)
        .await
    }

    /// Fetch one post with its author projection
    pub async fn find_with_author(
        pool: &PgPool,
        id: i64,
    ) -> Result<Option<PostWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, PostWithAuthor>(&format!("{SELECT_WITH_AUTHOR} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Increment the like counter, returning whether the post exists
    ///
    /// A single UPDATE, atomic under concurrent likes.
    pub async fn add_like(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE posts SET likes = likes + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Increment the comment counter, returning whether the post exists
    pub async fn add_comment(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE posts SET comments = comments + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Post service: feed listing, creation, and reaction counters

use crate::error::ApiError;
use crate::repositories::{PostRepository, PostWithAuthor};
use crate::types::{PostView, UserProfile};
use sqlx::PgPool;

fn to_view(post: PostWithAuthor) -> PostView {
    // Author columns are null when the user row is gone; the post is
    // still rendered, authorless.
    let user = match (post.author_email, post.author_created_at) {
        (Some(email), Some(created_at)) => Some(UserProfile {
            id: post.user_id,
            email,
            created_at,
        }),
        _ => None,
    };

    PostView {
        id: post.id,
        content: post.content,
        image_url: post.image_url,
        created_at: post.created_at,
        user,
        likes: post.likes,
        comments: post.comments,
    }
}

/// Post service
pub struct PostService;

impl PostService {
    /// List all posts, newest first
    pub async fn list(pool: &PgPool) -> Result<Vec<PostView>, ApiError> {
        let posts = PostRepository::list_recent(pool).await?;
        Ok(posts.into_iter().map(to_view).collect())
    }

    /// Create a post authored by the given user
    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        content: &str,
        image_url: Option<&str>,
    ) -> Result<PostView, ApiError> {
        if content.trim().is_empty() {
            return Err(ApiError::Validation(
                "Post content must not be empty".to_string(),
            ));
        }

        let id = PostRepository::create(pool, user_id, content, image_url).await?;
        Self::fetch(pool, id).await
    }

    /// Add a like to a post
    pub async fn like(pool: &PgPool, id: i64) -> Result<PostView, ApiError> {
        if !PostRepository::add_like(pool, id).await? {
            return Err(ApiError::NotFound("Post not found".to_string()));
        }
        Self::fetch(pool, id).await
    }

    /// Add a comment to a post
    ///
    /// Comments themselves are not stored, only counted, matching the
    /// feed's denormalized counters.
    pub async fn comment(pool: &PgPool, id: i64, comment: &str) -> Result<PostView, ApiError> {
        if comment.trim().is_empty() {
            return Err(ApiError::Validation(
                "Comment must not be empty".to_string(),
            ));
        }
        if !PostRepository::add_comment(pool, id).await? {
            return Err(ApiError::NotFound("Post not found".to_string()));
        }
        Self::fetch(pool, id).await
    }

    async fn fetch(pool: &PgPool, id: i64) -> Result<PostView, ApiError> {
        let post = PostRepository::find_with_author(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;
        Ok(to_view(post))
    }
}

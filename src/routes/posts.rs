//! Post routes
//!
//! Every route here sits behind the auth gate; handlers receive the
//! admitted identity via `Extension<CurrentUser>` and never see an
//! unauthenticated request.

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::services::PostService;
use crate::state::AppState;
use crate::types::{CommentRequest, CreatePostRequest, PostListResponse, PostResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

/// List all posts, newest first
///
/// GET /api/posts
pub async fn list_posts(
    State(state): State<AppState>,
    Extension(_user): Extension<CurrentUser>,
) -> ApiResult<Json<PostListResponse>> {
    let posts = PostService::list(&state.db).await?;
    Ok(Json(PostListResponse { posts }))
}

/// Create a new post
///
/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreatePostRequest>,
) -> ApiResult<(StatusCode, Json<PostResponse>)> {
    let content = req
        .content
        .as_deref()
        .ok_or_else(|| ApiError::BadRequest("content is required".to_string()))?;
    let post = PostService::create(&state.db, user.id, content, req.image_url.as_deref()).await?;

    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            message: "Post created successfully".to_string(),
            post,
        }),
    ))
}

/// Like a post
///
/// POST /api/posts/:id/like
pub async fn like_post(
    State(state): State<AppState>,
    Extension(_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> ApiResult<Json<PostResponse>> {
    let post = PostService::like(&state.db, id).await?;

    Ok(Json(PostResponse {
        message: "Like added successfully".to_string(),
        post,
    }))
}

/// Comment on a post
///
/// POST /api/posts/:id/comment
pub async fn comment_post(
    State(state): State<AppState>,
    Extension(_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(req): Json<CommentRequest>,
) -> ApiResult<Json<PostResponse>> {
    let comment = req
        .comment
        .as_deref()
        .ok_or_else(|| ApiError::BadRequest("comment is required".to_string()))?;
    let post = PostService::comment(&state.db, id, comment).await?;

    Ok(Json(PostResponse {
        message: "Comment added successfully".to_string(),
        post,
    }))
}

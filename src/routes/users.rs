//! User listing route

use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use crate::types::UserListResponse;
use axum::{extract::State, Json};

/// List all users (public projections only)
///
/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let users = UserService::list(&state.db).await?;
    let total = users.len();

    Ok(Json(UserListResponse { users, total }))
}

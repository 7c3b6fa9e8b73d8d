//! Authentication routes
//!
//! Registration and login. Both hand raw credentials to the user
//! service and return public projections only; password hashing and
//! verification never run on the async runtime threads.

use crate::error::{ApiError, ApiResult};
use crate::services::UserService;
use crate::state::AppState;
use crate::types::{CredentialsRequest, LoginResponse, RegisterResponse};
use axum::{extract::State, http::StatusCode, Json};

fn required_credentials(req: &CredentialsRequest) -> Result<(&str, &str), ApiError> {
    match (req.username.as_deref(), req.password.as_deref()) {
        (Some(username), Some(password)) => Ok((username, password)),
        _ => Err(ApiError::BadRequest(
            "username and password are required".to_string(),
        )),
    }
}

/// Register a new user
///
/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let (username, password) = required_credentials(&req)?;
    let user = UserService::register(&state.db, username, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user,
        }),
    ))
}

/// Login with email and password
///
/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let (username, password) = required_credentials(&req)?;
    let (user, token) = UserService::login(&state.db, state.jwt(), username, password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user,
        token,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_bad_requests() {
        let empty = CredentialsRequest::default();
        assert!(matches!(
            required_credentials(&empty),
            Err(ApiError::BadRequest(_))
        ));

        let half = CredentialsRequest {
            username: Some("a@b.com".to_string()),
            password: None,
        };
        assert!(matches!(
            required_credentials(&half),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_present_fields_pass_through() {
        let req = CredentialsRequest {
            username: Some("a@b.com".to_string()),
            password: Some("secret1".to_string()),
        };
        assert_eq!(required_credentials(&req).unwrap(), ("a@b.com", "secret1"));
    }
}

//! The request gate for protected routes
//!
//! Runs before handler dispatch via `middleware::from_fn_with_state`.
//! Every rejection is one of four distinct kinds, in order:
//!
//! 1. No Authorization header          -> `MissingToken`
//! 2. Header not `Bearer <token>`      -> `MalformedToken`
//! 3. Bad signature / elapsed expiry   -> `InvalidToken` / `ExpiredToken`
//! 4. Subject id with no account row   -> `UnknownSubject`
//!
//! On admission the resolved identity is injected into request
//! extensions as a read-only [`CurrentUser`]; the gate never mutates
//! account state. Signature and expiry checks are local CPU work; only
//! subject resolution touches the database.

use crate::auth::jwt::TokenError;
use crate::error::ApiError;
use crate::repositories::UserRepository;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};

/// The identity admitted by the gate, available to downstream handlers
/// via `Extension<CurrentUser>`. Carries the public projection only,
/// never the credential digest.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Extract the token value from an Authorization header
///
/// The header must split into exactly a `Bearer` scheme and one token
/// value; anything else is malformed.
pub(crate) fn parse_bearer(header: &str) -> Result<&str, ApiError> {
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(ApiError::MalformedToken),
    }
}

/// Gate middleware for protected routes
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or(ApiError::MissingToken)?
        .to_str()
        .map_err(|_| ApiError::MalformedToken)?;

    let token = parse_bearer(header)?;

    let user_id = state.jwt().verify_subject(token).map_err(|e| match e {
        TokenError::Expired => ApiError::ExpiredToken,
        TokenError::Invalid => ApiError::InvalidToken,
    })?;

    // The subject must still resolve to a live account; a token can
    // outlive the row it was issued for.
    let user = UserRepository::find_by_id(state.db(), user_id)
        .await?
        .ok_or(ApiError::UnknownSubject)?;

    request.extensions_mut().insert(CurrentUser {
        id: user.id,
        email: user.email,
        created_at: user.created_at,
    });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bearer_accepts_scheme_and_token() {
        assert_eq!(parse_bearer("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_parse_bearer_rejects_scheme_only() {
        assert!(matches!(
            parse_bearer("Bearer"),
            Err(ApiError::MalformedToken)
        ));
    }

    #[test]
    fn test_parse_bearer_rejects_extra_parts() {
        assert!(matches!(
            parse_bearer("Bearer one two"),
            Err(ApiError::MalformedToken)
        ));
    }

    #[test]
    fn test_parse_bearer_rejects_wrong_scheme() {
        assert!(matches!(
            parse_bearer("Basic dXNlcjpwYXNz"),
            Err(ApiError::MalformedToken)
        ));
    }

    #[test]
    fn test_parse_bearer_rejects_empty_header() {
        assert!(matches!(parse_bearer(""), Err(ApiError::MalformedToken)));
    }
}

//! API request and response types
//!
//! Public projections only: nothing here carries a credential digest,
//! so a hash can never be serialized into a response by accident.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials payload shared by registration and login
///
/// `username` carries the email address; the field name is part of the
/// wire contract with existing clients. Fields are optional so that a
/// missing field is reported as a 400 by the handler rather than a
/// deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Public projection of a user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Successful registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserProfile,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserProfile,
    pub token: String,
}

/// User listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserProfile>,
    pub total: usize,
}

/// A post with its author's public projection
///
/// `user` is null when the author row no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub id: i64,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user: Option<UserProfile>,
    pub likes: i32,
    pub comments: i32,
}

/// Post creation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub content: Option<String>,
    pub image_url: Option<String>,
}

/// Comment request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentRequest {
    pub comment: Option<String>,
}

/// Post listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostView>,
}

/// Response wrapping a single post with a status message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub message: String,
    pub post: PostView,
}

/// Problem report request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    pub problem: Option<String>,
}

/// A submitted problem report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportView {
    pub id: i64,
    pub problem: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<i64>,
}

/// Report submission response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    pub message: String,
    pub report: ReportView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_profile_serializes_expected_fields() {
        let profile = UserProfile {
            id: 1,
            email: "a@b.com".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("email"));
        assert!(obj.contains_key("created_at"));
        assert!(!obj.contains_key("password_hash"));
    }

    #[test]
    fn test_credentials_request_uses_username_field() {
        let req: CredentialsRequest =
            serde_json::from_str(r#"{"username": "a@b.com", "password": "secret1"}"#).unwrap();
        assert_eq!(req.username.as_deref(), Some("a@b.com"));
        assert_eq!(req.password.as_deref(), Some("secret1"));
    }

    #[test]
    fn test_credentials_request_tolerates_missing_fields() {
        // Field presence is the handler's call, not a parse failure
        let req: CredentialsRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(req.username.is_none());
        assert!(req.password.is_none());
    }
}

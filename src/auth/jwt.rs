//! Session token issuance and verification
//!
//! Stateless HS256 tokens carrying the subject's user id and an
//! absolute expiry. Keys are pre-computed once from the process-wide
//! secret; issuing and verifying are pure functions of (claims, keys).
//!
//! Expired and otherwise-invalid tokens are distinct failures so
//! clients can re-authenticate instead of treating the token as
//! corrupted input.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Token verification failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
}

/// Pre-computed JWT keys
///
/// Key derivation is not free, so the keys are built once at startup
/// and shared via Arc.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// Session token service
///
/// Construct once at startup and store in AppState; cloning is cheap.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    validation: Validation,
    validity_secs: i64,
}

impl JwtService {
    pub fn new(secret: &str, validity_secs: i64) -> Self {
        // Expiry is a hard boundary: a token is rejected at the exact
        // second its window elapses, with no clock-skew allowance.
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            keys: JwtKeys::new(secret),
            validation,
            validity_secs,
        }
    }

    /// Issue a session token for a user
    ///
    /// Expiry is issuance time plus the configured validity window.
    /// No storage side effect; tokens are not tracked after issuance.
    pub fn issue(&self, user_id: i64) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.validity_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))
    }

    /// Verify a token's signature and expiry, returning its claims
    #[inline]
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, self.keys.decoding(), &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }

    /// Verify a token and parse its subject as a user id
    pub fn verify_subject(&self, token: &str) -> Result<i64, TokenError> {
        let claims = self.verify(token)?;
        claims.sub.parse().map_err(|_| TokenError::Invalid)
    }

    /// Token validity window in seconds
    #[inline]
    pub fn validity_secs(&self) -> i64 {
        self.validity_secs
    }
}

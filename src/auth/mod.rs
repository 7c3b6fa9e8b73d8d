//! Authentication module
//!
//! JWT session tokens with argon2 password hashing, plus the gate
//! middleware that protects routes.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService, TokenError};
pub use middleware::{require_auth, CurrentUser};
pub use password::PasswordService;

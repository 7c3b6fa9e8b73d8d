//! Database repositories
//!
//! Data access layer. Repositories return `sqlx::Error` unmapped; the
//! service layer owns the translation into API error kinds.

pub mod post;
pub mod report;
pub mod user;

pub use post::{PostRepository, PostWithAuthor};
pub use report::{ReportRecord, ReportRepository};
pub use user::{UserRecord, UserRepository};

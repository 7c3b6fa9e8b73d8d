//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth components.

pub mod post;
pub mod report;
pub mod user;

pub use post::PostService;
pub use report::ReportService;
pub use user::UserService;

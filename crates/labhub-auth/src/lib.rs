//! # labhub-auth
//!
//! The authorization core of LabHub: bearer-token plumbing, the
//! per-request [`Authentication`] context, role-based permission checks,
//! and the access manager deciding whether one user may act on another
//! user's resources.

pub mod access;
pub mod context;
pub mod rbac;
pub mod token;

pub use access::{AccessManager, AccessManagerFactory};
pub use context::Authentication;
pub use rbac::PermissionChecker;

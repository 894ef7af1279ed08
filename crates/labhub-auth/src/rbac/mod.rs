//! Role-based permission checks.

pub mod checker;

pub use checker::PermissionChecker;

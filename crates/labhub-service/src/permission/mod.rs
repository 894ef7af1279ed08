//! Role/permission registry operations.

pub mod service;

pub use service::PermissionService;

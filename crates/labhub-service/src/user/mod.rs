//! User profile and import operations.

pub mod service;

pub use service::UserService;

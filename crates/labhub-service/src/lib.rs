//! # labhub-service
//!
//! Application services for LabHub. Each service wraps one or more
//! repositories and carries the operation-level rules (validation,
//! not-found taxonomy, audit logging) that the HTTP layer stays free of.

pub mod access_pass;
pub mod permission;
pub mod user;

//! HTTP request handlers, organized by domain.

pub mod access_pass;
pub mod health;
pub mod permission;
pub mod role;
pub mod user;

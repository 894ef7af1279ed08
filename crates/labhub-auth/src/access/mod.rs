//! Delegated-access decisions between user accounts.

pub mod manager;

pub use manager::{AccessManager, AccessManagerFactory};

//! # labhub-entity
//!
//! Domain entity models for LabHub. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod access_pass;
pub mod permission;
pub mod role;
pub mod test;
pub mod test_type;
pub mod user;

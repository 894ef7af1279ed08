//! # labhub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all LabHub entities.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;

pub use connection::DatabasePool;

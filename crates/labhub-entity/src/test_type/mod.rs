//! Test type domain entities.

pub mod model;

pub use model::{ResultsField, ResultsSchema, TestType};

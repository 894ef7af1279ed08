//! Permission domain entities and built-in permission names.

pub mod model;
pub mod names;

pub use model::Permission;

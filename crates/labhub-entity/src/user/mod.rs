//! User domain entities.

pub mod model;
pub mod profile;

pub use model::User;
pub use profile::{Address, Profile, Sex};

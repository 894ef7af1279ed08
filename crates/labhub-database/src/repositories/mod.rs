//! Concrete repository implementations, one per aggregate.

pub mod access_pass;
pub mod permission;
pub mod role;
pub mod test_type;
pub mod user;

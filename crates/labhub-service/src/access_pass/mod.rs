//! Access pass grant/revoke flows.

pub mod service;

pub use service::AccessPassService;

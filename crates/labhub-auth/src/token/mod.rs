//! Bearer token plumbing (JWT, HMAC-SHA256).
//!
//! Token issuance lives outside this service; the encoder exists for the
//! sign-in flow's consumers and for tests.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::TokenDecoder;
pub use encoder::TokenEncoder;

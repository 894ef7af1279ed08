//! Integration test entry point.
//!
//! Each module exercises one slice of the HTTP API against a real
//! PostgreSQL database (configured via `config/test.toml` or
//! `LABHUB__DATABASE__URL`).


mod access_pass_test;
mod permission_test;
mod test_records_test;

//! Diagnostic test domain entities.


pub use model::Test;
pub use results::TestResults;

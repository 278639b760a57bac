//! Command implementations for secrets-cli

pub mod extract;
pub mod restore;

pub use extract::run_extract;
pub use restore::run_restore;

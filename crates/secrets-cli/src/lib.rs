//! Command-line tools for Claude Code configuration secrets
//!
//! Two binaries share this library:
//!
//! - `extract-secrets` prints every sensitive field of `~/.claude.json` as
//!   `KEY="value"` lines
//! - `restore-secrets` merges a `secrets.env` file back into
//!   `~/.claude.json`, keeping a `.backup` copy of the previous file

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{CliError, Result, report_error};

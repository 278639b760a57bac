//! Filesystem helpers for claude-secrets
//!
//! Provides normalized paths, text I/O with atomic writes, and the
//! single-file `.backup` copy taken before a configuration is overwritten.

pub mod backup;
pub mod error;
pub mod io;
pub mod path;

pub use backup::{BACKUP_SUFFIX, backup_file, backup_path};
pub use error::{Error, Result};
pub use path::NormalizedPath;

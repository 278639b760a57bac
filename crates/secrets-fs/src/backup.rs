//! Sibling `.backup` copies of configuration files
//!
//! A backup lives next to the file it protects, at `<path>.backup`. Only
//! one generation is kept; taking a new backup replaces the previous one.

use crate::{Error, NormalizedPath, Result};
use std::fs;

/// Suffix appended to a file path to form its backup path
pub const BACKUP_SUFFIX: &str = ".backup";

/// Path the backup of `path` is written to.
pub fn backup_path(path: &NormalizedPath) -> NormalizedPath {
    path.with_suffix(BACKUP_SUFFIX)
}

/// Copy `path` to its backup location, overwriting any older backup.
///
/// Returns the backup path.
pub fn backup_file(path: &NormalizedPath) -> Result<NormalizedPath> {
    let dest = backup_path(path);
    fs::copy(path.to_native(), dest.to_native()).map_err(|e| Error::io(path.to_native(), e))?;
    tracing::info!(source = %path, backup = %dest, "backed up file");
    Ok(dest)
}

//! Text I/O with atomic writes
//!
//! Configuration files hold API tokens. An overwrite keeps the target's
//! permissions and writes through a symlinked target to the real file.

use crate::{Error, NormalizedPath, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write content atomically to a file with locking.
///
/// The content goes to a temp file next to the real target and is renamed
/// over it. If the target already exists its permissions are carried over,
/// and a symlinked target is written through rather than replaced.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let target = resolve_target(&path.to_native())?;

    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_path = temp_path_for(&target);
    let permissions = fs::metadata(&target).ok().map(|m| m.permissions());

    let result = write_temp(&temp_path, content, permissions, &target).and_then(|()| {
        fs::rename(&temp_path, &target).map_err(|e| Error::io(&target, e))
    });

    if result.is_err() {
        // The temp copy may hold secrets
        let _ = fs::remove_file(&temp_path);
        return result;
    }

    tracing::debug!(path = %path, target = %target.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Follow a symlink to the file it points at.
///
/// A dangling link resolves to its (not yet existing) destination.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    let is_link = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return Ok(path.to_path_buf());
    }

    match dunce::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(_) => {
            let dest = fs::read_link(path).map_err(|e| Error::io(path, e))?;
            Ok(match path.parent() {
                Some(parent) if dest.is_relative() => parent.join(dest),
                _ => dest,
            })
        }
    }
}

/// `.<name>.<pid>.tmp` in the target's directory, so the rename stays on one filesystem.
fn temp_path_for(target: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        target
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    target.with_file_name(temp_name)
}

fn write_temp(
    temp_path: &Path,
    content: &[u8],
    permissions: Option<Permissions>,
    target: &Path,
) -> Result<()> {
    let mut temp_file: File = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    // Before any content lands in the file
    if let Some(permissions) = permissions {
        temp_file
            .set_permissions(permissions)
            .map_err(|e| Error::io(temp_path, e))?;
    }

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;
    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file
        .sync_all()
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

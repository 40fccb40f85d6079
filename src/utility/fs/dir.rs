// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::ErrorKind;
use std::path::Path;

use crate::config::paths::VelaHome;
use crate::error::{FsError, VelaResult};

/// Ensures `dir` exists, creating it and any parents if needed.
///
/// Returns `true` if the directory was already there. New directories get
/// mode `0755` on Unix.
///
/// # Example
/// ```no_run
/// use vela_env::utility::fs::ensure_dir;
/// use std::path::Path;
///
/// let existed = ensure_dir(Path::new("/tmp/vela/capabilities"))?;
/// # Ok::<(), vela_env::error::VelaError>(())
/// ```
///
/// # Errors
///
/// Returns `FsError::NotADirectory` if `dir` exists as something else, and
/// the classified I/O error for anything else (permission denied, etc).
pub fn ensure_dir(dir: &Path) -> VelaResult<bool> {
    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(true),
        Ok(_) => Err(FsError::NotADirectory(dir.display().to_string()).into()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            create_dir_all(dir).map_err(|e| FsError::from_io(dir, e))?;
            tracing::debug!(path = %dir.display(), "Created directory");
            Ok(false)
        }
        Err(e) => Err(FsError::from_io(dir, e).into()),
    }
}

#[cfg(unix)]
fn create_dir_all(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o755)
        .create(dir)
}

#[cfg(not(unix))]
fn create_dir_all(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
}

/// Ensures the capability cache and the capability-center scratch directory.
///
/// Stops at the first failure; whatever was created stays, and calling this
/// again is safe.
///
/// # Errors
///
/// Propagates the first [`ensure_dir`] error.
pub fn init_capability_state(home: &VelaHome) -> VelaResult<()> {
    ensure_dir(&home.capability_dir())?;
    ensure_dir(&home.cap_center_tmp_dir())?;
    Ok(())
}

/// Removes `dir` recursively. A missing directory is not an error.
///
/// # Errors
///
/// Returns the classified I/O error if removal fails.
pub fn remove_dir_if_exists(dir: &Path) -> VelaResult<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FsError::from_io(dir, e).into()),
    }
}

// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::dir::ensure_dir;
use crate::error::{FsError, VelaResult};

/// Writes `contents` to `path` so readers see either the old or the new file.
///
/// The data goes to a temporary file in the same directory, which is then
/// renamed over `path`. The parent directory is created if missing.
///
/// # Errors
///
/// Returns the classified I/O error if the parent cannot be created or the
/// temporary file cannot be written or persisted.
pub fn write_atomic(path: &Path, contents: &[u8]) -> VelaResult<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    ensure_dir(parent)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(parent, e))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| FsError::from_io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| FsError::from_io(path, e.error))?;
    Ok(())
}

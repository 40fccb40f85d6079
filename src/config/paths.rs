// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Home directory resolution and derived paths.
//!
//! ```text
//! $VELA_HOME  or  ~/.vela
//!   config.toml
//!   frontend/
//!   centers/
//!     config.yaml
//!     .tmp/
//!   capabilities/
//!   envs/<name>/
//!   store/
//! ```
//!
//! A non-empty `VELA_HOME` replaces the default location entirely.

use std::path::{Path, PathBuf};

use crate::error::{FsError, VelaResult};

/// Environment variable overriding the home directory.
pub const VELA_HOME_ENV: &str = "VELA_HOME";

/// Environment variable selecting the storage driver.
pub const STORAGE_DRIVER_ENV: &str = "STORAGE_DRIVER";

/// Directory name under the user home when no override is set.
pub const DEFAULT_HOME_DIR: &str = ".vela";

/// Resolve the home directory from the process environment.
///
/// # Errors
///
/// Returns `FsError::HomeUnavailable` if `VELA_HOME` is unset or empty and
/// the platform cannot report a user home.
pub fn resolve_home() -> VelaResult<PathBuf> {
    let custom = std::env::var(VELA_HOME_ENV).ok();
    resolve_home_from(custom.as_deref(), dirs::home_dir())
}

/// Resolve the home directory from an explicit override and user home.
///
/// # Errors
///
/// Returns `FsError::HomeUnavailable` if both inputs are missing.
pub fn resolve_home_from(custom: Option<&str>, user_home: Option<PathBuf>) -> VelaResult<PathBuf> {
    if let Some(custom) = custom
        && !custom.is_empty()
    {
        return Ok(PathBuf::from(custom));
    }
    user_home
        .map(|home| home.join(DEFAULT_HOME_DIR))
        .ok_or_else(|| FsError::HomeUnavailable.into())
}

/// Resolved vela home with its well-known subpaths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VelaHome {
    root: PathBuf,
}

impl VelaHome {
    /// Use `root` as the home directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve from the process environment.
    ///
    /// # Errors
    ///
    /// See [`resolve_home`].
    pub fn resolve() -> VelaResult<Self> {
        resolve_home().map(Self::new)
    }

    /// Resolve, preferring `custom` over `VELA_HOME` when given.
    ///
    /// # Errors
    ///
    /// See [`resolve_home`].
    pub fn resolve_with(custom: Option<&Path>) -> VelaResult<Self> {
        match custom {
            Some(path) if !path.as_os_str().is_empty() => Ok(Self::new(path)),
            _ => Self::resolve(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn frontend_dir(&self) -> PathBuf {
        self.root.join("frontend")
    }

    #[must_use]
    pub fn cap_center_dir(&self) -> PathBuf {
        self.root.join("centers")
    }

    /// Capability-center repository config (`centers/config.yaml`).
    #[must_use]
    pub fn cap_center_config(&self) -> PathBuf {
        self.cap_center_dir().join("config.yaml")
    }

    /// Scratch directory for capability downloads.
    #[must_use]
    pub fn cap_center_tmp_dir(&self) -> PathBuf {
        self.cap_center_dir().join(".tmp")
    }

    /// Cached workload and trait definitions.
    #[must_use]
    pub fn capability_dir(&self) -> PathBuf {
        self.root.join("capabilities")
    }

    #[must_use]
    pub fn envs_dir(&self) -> PathBuf {
        self.root.join("envs")
    }

    /// Per-environment directory (`envs/<name>`).
    #[must_use]
    pub fn env_dir(&self, name: &str) -> PathBuf {
        self.envs_dir().join(name)
    }

    /// Root of the local storage driver.
    #[must_use]
    pub fn store_dir(&self) -> PathBuf {
        self.root.join("store")
    }

    /// Optional settings file.
    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }
}

/// Resolve `frontend/` under the home directory.
///
/// # Errors
///
/// See [`resolve_home`].
pub fn frontend_dir() -> VelaResult<PathBuf> {
    VelaHome::resolve().map(|home| home.frontend_dir())
}

/// Resolve `centers/` under the home directory.
///
/// # Errors
///
/// See [`resolve_home`].
pub fn cap_center_dir() -> VelaResult<PathBuf> {
    VelaHome::resolve().map(|home| home.cap_center_dir())
}

/// Resolve `centers/config.yaml` under the home directory.
///
/// # Errors
///
/// See [`resolve_home`].
pub fn cap_center_config() -> VelaResult<PathBuf> {
    VelaHome::resolve().map(|home| home.cap_center_config())
}

/// Resolve `capabilities/` under the home directory.
///
/// # Errors
///
/// See [`resolve_home`].
pub fn capability_dir() -> VelaResult<PathBuf> {
    VelaHome::resolve().map(|home| home.capability_dir())
}

/// Resolve `envs/<name>` under the home directory.
///
/// Resolution failures are returned, never an empty path.
///
/// # Errors
///
/// See [`resolve_home`].
pub fn env_dir(name: &str) -> VelaResult<PathBuf> {
    VelaHome::resolve().map(|home| home.env_dir(name))
}

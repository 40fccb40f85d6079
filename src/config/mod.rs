// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings management for vela-env.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <home>/config.toml (optional)
//! 3. VELA_* env vars
//! 4. STORAGE_DRIVER
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! VELA_STORAGE_DRIVER=memory     → storage_driver = "memory"
//! VELA_DEFAULT_NAMESPACE=apps    → default_namespace = "apps"
//! STORAGE_DRIVER=local           → storage_driver = "local"
//! ```

pub mod loader;
pub mod paths;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, VelaResult};

use loader::SettingsLoader;

/// Namespace bound to the bootstrap `default` environment.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Backend used to persist environment and config records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageDriver {
    /// JSON files under `<home>/store`.
    #[default]
    Local,
    /// Process memory; nothing survives exit.
    Memory,
}

impl fmt::Display for StorageDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StorageDriver {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "memory" => Ok(Self::Memory),
            other => Err(SettingsError::InvalidValue {
                key: "storage_driver".to_string(),
                message: format!("unknown storage driver '{other}', expected local or memory"),
            }),
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Storage driver for environment and config records.
    pub storage_driver: StorageDriver,
    /// Namespace given to environments created without one.
    pub default_namespace: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_driver: StorageDriver::default(),
            default_namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl Settings {
    /// Create a new settings loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vela_env::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("/home/me/.vela/config.toml")
    ///     .with_env_prefix("VELA")
    ///     .build()?;
    /// # Ok::<(), vela_env::error::VelaError>(())
    /// ```
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::ParseError` if the content is not valid TOML or
    /// does not match the `Settings` structure.
    pub fn parse(content: &str) -> VelaResult<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format settings for display, one `key = value` per line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        vec![
            format!("default_namespace = {}", self.default_namespace),
            format!("storage_driver    = {}", self.storage_driver),
        ]
    }
}

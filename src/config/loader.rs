// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! SettingsLoader::new()
//!   .add_toml_file_optional()
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .set()
//!        |
//!        v
//!    build() --> Settings
//! ```

use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::{SettingsError, VelaResult};

/// Builder for loading settings from multiple sources.
pub struct SettingsLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<PathBuf>,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML settings file that may be absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(p.to_path_buf());
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    /// Reads `<PREFIX>_<KEY>` environment variables at build time.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a settings override.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` if the key is invalid.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> VelaResult<Self> {
        self.builder =
            self.builder
                .set_override(key, value)
                .map_err(|e| SettingsError::InvalidValue {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        Ok(self)
    }

    /// Settings files that existed when they were added.
    #[must_use]
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Builds the settings from all added sources.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::ParseError` if a source has invalid TOML or the
    /// merged values cannot be deserialized into `Settings`.
    pub fn build(self) -> VelaResult<Settings> {
        let builder = match &self.env_prefix {
            Some(prefix) => self
                .builder
                .add_source(config::Environment::with_prefix(prefix).prefix_separator("_")),
            None => self.builder,
        };

        let settings = builder
            .build()
            .and_then(|c| c.try_deserialize::<Settings>())
            .map_err(|e| SettingsError::ParseError {
                message: e.to_string(),
            })?;

        tracing::debug!(
            storage_driver = %settings.storage_driver,
            default_namespace = %settings.default_namespace,
            files = self.files.len(),
            "Settings loaded"
        );
        Ok(settings)
    }
}

// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Startup state shared by the command handlers.
//!
//! ```text
//! resolve home --> init_capability_state --> load settings
//!      --> open store --> init_default --> AppContext
//! ```

use anyhow::Context;

use crate::cli::global::GlobalOptions;
use crate::config::Settings;
use crate::config::paths::VelaHome;
use crate::error::Result;
use crate::registry::{ConfigRegistry, EnvRegistry};
use crate::store::{Store, open_store};
use crate::utility::fs::init_capability_state;

/// Prefix of environment variables that override settings.
pub const SETTINGS_ENV_PREFIX: &str = "VELA";

/// Resolved home, settings and opened store.
pub struct AppContext {
    home: VelaHome,
    settings: Settings,
    store: Box<dyn Store>,
}

impl AppContext {
    /// Resolves the home and settings from `global`, then opens the context.
    ///
    /// # Errors
    ///
    /// Returns an error if the home cannot be resolved or prepared, the
    /// settings are invalid, or the store cannot be initialized.
    pub fn open(global: &GlobalOptions) -> Result<Self> {
        let home = VelaHome::resolve_with(global.home.as_deref())
            .context("failed to resolve the vela home directory")?;
        let settings = load_settings(&home, global)?;
        Self::new(home, settings)
    }

    /// Opens the store for `settings` under `home` and bootstraps the
    /// default environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the home cannot be prepared or the default
    /// environment cannot be created.
    pub fn new(home: VelaHome, settings: Settings) -> Result<Self> {
        init_capability_state(&home).context("failed to prepare the vela home directory")?;
        let store = open_store(settings.storage_driver, &home);
        let ctx = Self {
            home,
            settings,
            store,
        };
        ctx.envs()
            .init_default()
            .context("failed to initialize the default environment")?;
        Ok(ctx)
    }

    #[must_use]
    pub const fn home(&self) -> &VelaHome {
        &self.home
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Environment registry bound to this home.
    #[must_use]
    pub fn envs(&self) -> EnvRegistry<'_> {
        EnvRegistry::new(self.store())
            .with_home(self.home.clone())
            .with_default_namespace(self.settings.default_namespace.as_str())
    }

    /// Config registry for the namespace of `env_name` (empty = current).
    ///
    /// # Errors
    ///
    /// Returns an error if the environment does not exist.
    pub fn configs(&self, env_name: &str) -> Result<ConfigRegistry<'_>> {
        Ok(ConfigRegistry::for_env(&self.envs(), env_name)?)
    }
}

/// Loads settings from `<home>/config.toml`, `VELA_*` variables and the
/// storage driver given on the command line or through `STORAGE_DRIVER`.
///
/// # Errors
///
/// Returns an error if any source holds an invalid value.
pub fn load_settings(home: &VelaHome, global: &GlobalOptions) -> Result<Settings> {
    let mut loader = Settings::builder()
        .add_toml_file_optional(home.settings_file())
        .with_env_prefix(SETTINGS_ENV_PREFIX);
    if let Some(driver) = global.storage_driver {
        loader = loader.set("storage_driver", driver.to_string())?;
    }
    loader.build().context("failed to load settings")
}

// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config command arguments.

use clap::{Args, Subcommand};

/// Arguments for the `config` command.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Environment whose namespace holds the configs (defaults to current).
    #[arg(short = 'e', long = "env", value_name = "ENV", global = true)]
    pub env: Option<String>,

    /// Config subcommand.
    #[command(subcommand)]
    pub subcommand: ConfigSubcommand,
}

impl ConfigArgs {
    /// Environment name, empty for the current one.
    #[must_use]
    pub fn env_name(&self) -> &str {
        self.env.as_deref().unwrap_or_default()
    }
}

/// Config subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigSubcommand {
    /// Sets key=value pairs in a config, creating it if needed.
    Set(ConfigSetArgs),

    /// Shows the data of a config.
    Get(ConfigNameArgs),

    /// Lists configs.
    #[command(visible_alias = "list")]
    Ls,

    /// Deletes a config.
    #[command(visible_aliases = ["delete", "rm"])]
    Del(ConfigNameArgs),
}

/// Arguments for the `config set` subcommand.
#[derive(Debug, Clone, Args)]
pub struct ConfigSetArgs {
    /// Config name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Entries as key=value.
    #[arg(value_name = "KEY=VALUE")]
    pub pairs: Vec<String>,
}

/// A config name.
#[derive(Debug, Clone, Args)]
pub struct ConfigNameArgs {
    /// Config name.
    #[arg(value_name = "NAME")]
    pub name: String,
}

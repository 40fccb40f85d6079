// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env command arguments.
//!
//! # Subcommands
//!
//! ```text
//! env init NAME [--namespace NS] [--email E] [--domain D]
//!   → create or update, then make current
//! env ls [NAME...]
//!   → table of environments
//! env set NAME
//!   → switch current
//! env delete NAME...
//!   → remove (never the current one)
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `env` command.
#[derive(Debug, Clone, Args)]
pub struct EnvArgs {
    /// Env subcommand.
    #[command(subcommand)]
    pub subcommand: EnvSubcommand,
}

/// Env subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum EnvSubcommand {
    /// Creates or updates an environment and makes it current.
    #[command(visible_alias = "create")]
    Init(InitArgs),

    /// Lists environments.
    #[command(visible_alias = "list")]
    Ls(LsArgs),

    /// Switches the current environment.
    #[command(visible_alias = "sw")]
    Set(SetArgs),

    /// Deletes environments.
    #[command(visible_aliases = ["del", "rm"])]
    Delete(DeleteArgs),
}

/// Arguments for the `env init` subcommand.
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Environment name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Namespace the environment is bound to.
    #[arg(long)]
    pub namespace: Option<String>,

    /// Contact email.
    #[arg(long)]
    pub email: Option<String>,

    /// Domain for applications deployed into the environment.
    #[arg(long)]
    pub domain: Option<String>,
}

/// Arguments for the `env ls` subcommand.
#[derive(Debug, Clone, Args)]
pub struct LsArgs {
    /// Only show these environments.
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,
}

/// Arguments for the `env set` subcommand.
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Environment to make current.
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for the `env delete` subcommand.
#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    /// Environments to delete.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for vela using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! vela [global options] <command>
//! version
//! options
//! env {init|ls|set|delete}
//! config {set|get|ls|del} [-e ENV]
//! ```

pub mod config;
pub mod env;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::config::ConfigArgs;
use crate::cli::env::EnvArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Environment and config registry for the vela CLI.
#[derive(Debug, Parser)]
#[command(
    name = "vela",
    author,
    version,
    about = "Manage vela environments and configs",
    long_about = "vela-env Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Environments bind a name to a namespace; exactly one of them\n\
                  is current. Configs are named key/value sets stored in the\n\
                  namespace of an environment.",
    after_help = "HOME DIRECTORY:\n\n\
                  State lives under ~/.vela unless VELA_HOME or --home points\n\
                  elsewhere. An optional config.toml in that directory sets\n\
                  storage_driver (local or memory) and default_namespace;\n\
                  VELA_* and STORAGE_DRIVER environment variables override it."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists the effective settings.
    Options,

    /// Manages environments.
    Env(EnvArgs),

    /// Manages configs in an environment's namespace.
    Config(ConfigArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}

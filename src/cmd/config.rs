// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config and settings command handlers.

use std::io::Write;

use crate::cli::config::{ConfigArgs, ConfigSubcommand};
use crate::config::Settings;
use crate::error::Result;
use crate::output::{render_config_data, render_config_list};
use crate::registry::ConfigRegistry;

use super::AppContext;

/// Run the config command against the namespace of `--env` (or the current
/// environment).
///
/// # Errors
///
/// Returns an error if the environment is unknown or the operation fails.
pub fn run_config_command(
    args: &ConfigArgs,
    ctx: &AppContext,
    out: &mut dyn Write,
) -> Result<()> {
    let configs = ctx.configs(args.env_name())?;
    match &args.subcommand {
        ConfigSubcommand::Set(set) => set_config(&configs, &set.name, &set.pairs, out),
        ConfigSubcommand::Get(get) => get_config(&configs, &get.name, out),
        ConfigSubcommand::Ls => list_configs(&configs, out),
        ConfigSubcommand::Del(del) => delete_config(&configs, &del.name, out),
    }
}

/// Display the effective settings.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn run_options_command(settings: &Settings, out: &mut dyn Write) -> Result<()> {
    for line in settings.format_options() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Merges `pairs` into config `name`.
///
/// # Errors
///
/// Returns an error for malformed or missing pairs and store failures.
pub fn set_config<S: AsRef<str>>(
    configs: &ConfigRegistry<'_>,
    name: &str,
    pairs: &[S],
    out: &mut dyn Write,
) -> Result<()> {
    let outcome = configs.set(name, pairs)?;
    writeln!(out, "config {name} {}", outcome.verb())?;
    Ok(())
}

/// Writes the data of config `name`.
///
/// # Errors
///
/// Returns an error if the config does not exist.
pub fn get_config(configs: &ConfigRegistry<'_>, name: &str, out: &mut dyn Write) -> Result<()> {
    let data = configs.get(name)?;
    out.write_all(render_config_data(&data).as_bytes())?;
    Ok(())
}

/// Writes the config name table.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_configs(configs: &ConfigRegistry<'_>, out: &mut dyn Write) -> Result<()> {
    let names = configs.list()?;
    out.write_all(render_config_list(&names).as_bytes())?;
    Ok(())
}

/// Deletes config `name`.
///
/// # Errors
///
/// Returns an error if the config does not exist.
pub fn delete_config(configs: &ConfigRegistry<'_>, name: &str, out: &mut dyn Write) -> Result<()> {
    configs.delete(name)?;
    writeln!(out, "config {name} deleted")?;
    Ok(())
}

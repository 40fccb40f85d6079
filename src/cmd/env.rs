// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env command handlers.

use std::io::Write;

use crate::cli::env::{EnvArgs, EnvSubcommand, InitArgs};
use crate::error::Result;
use crate::output::render_env_list;
use crate::registry::{EnvMeta, EnvRegistry};

use super::AppContext;

/// Run the env command.
///
/// # Errors
///
/// Returns an error if the selected operation fails.
pub fn run_env_command(args: &EnvArgs, ctx: &AppContext, out: &mut dyn Write) -> Result<()> {
    let envs = ctx.envs();
    match &args.subcommand {
        EnvSubcommand::Init(init) => create_or_update_env(&envs, &meta_from_args(init), out),
        EnvSubcommand::Ls(ls) => list_envs(&envs, &ls.names, out),
        EnvSubcommand::Set(set) => set_env(&envs, &set.name, out),
        EnvSubcommand::Delete(delete) => delete_envs(&envs, &delete.names, out),
    }
}

fn meta_from_args(args: &InitArgs) -> EnvMeta {
    EnvMeta::builder()
        .name(args.name.as_str())
        .maybe_namespace(args.namespace.clone())
        .maybe_email(args.email.clone())
        .maybe_domain(args.domain.clone())
        .build()
}

/// Creates or updates `meta` and makes it current.
///
/// # Errors
///
/// Returns an error if the name is invalid or the store fails.
pub fn create_or_update_env(
    envs: &EnvRegistry<'_>,
    meta: &EnvMeta,
    out: &mut dyn Write,
) -> Result<()> {
    let outcome = envs.create(meta)?;
    let verb = outcome.verb();
    let env = outcome.into_inner();
    writeln!(out, "environment {} {verb}, namespace: {}", env.name, env.namespace)?;
    Ok(())
}

/// Writes the environment table, optionally limited to `names`.
///
/// # Errors
///
/// Returns an error if the store fails or the output cannot be written.
pub fn list_envs<S: AsRef<str>>(
    envs: &EnvRegistry<'_>,
    names: &[S],
    out: &mut dyn Write,
) -> Result<()> {
    let list = envs.list(names)?;
    out.write_all(render_env_list(&list).as_bytes())?;
    Ok(())
}

/// Makes `name` the current environment.
///
/// # Errors
///
/// Returns an error if `name` does not exist or the switch loses a race.
pub fn set_env(envs: &EnvRegistry<'_>, name: &str, out: &mut dyn Write) -> Result<()> {
    let env = envs.set_current(name)?;
    writeln!(out, "current environment switched to {}", env.name)?;
    Ok(())
}

/// Deletes each of `names`, stopping at the first failure.
///
/// Names before the failing one stay deleted; each of them has already been
/// reported on `out`.
///
/// # Errors
///
/// Returns an error if a name is unknown or is the current environment.
pub fn delete_envs<S: AsRef<str>>(
    envs: &EnvRegistry<'_>,
    names: &[S],
    out: &mut dyn Write,
) -> Result<()> {
    for name in names {
        let name = name.as_ref();
        envs.delete(name)?;
        writeln!(out, "environment {name} deleted")?;
    }
    Ok(())
}

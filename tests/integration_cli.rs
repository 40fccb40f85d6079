// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns and
//! runs parsed commands against a scratch home.

use clap::Parser;
use tempfile::TempDir;
use vela_env::cli::config::ConfigSubcommand;
use vela_env::cli::env::EnvSubcommand;
use vela_env::cli::{Cli, Command};
use vela_env::cmd::AppContext;
use vela_env::cmd::config::run_config_command;
use vela_env::cmd::env::run_env_command;
use vela_env::config::paths::VelaHome;
use vela_env::config::{Settings, StorageDriver};

fn run(ctx: &AppContext, args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("vela").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    match &cli.command {
        Some(Command::Env(args)) => run_env_command(args, ctx, &mut out)?,
        Some(Command::Config(args)) => run_config_command(args, ctx, &mut out)?,
        other => anyhow::bail!("unexpected command {other:?}"),
    }
    Ok(String::from_utf8(out)?)
}

fn memory_context(temp: &TempDir) -> AppContext {
    let settings = Settings {
        storage_driver: StorageDriver::Memory,
        ..Settings::default()
    };
    AppContext::new(VelaHome::new(temp.path()), settings).unwrap()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["vela", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["vela", "--home", "/tmp/x"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_global_options_after_subcommand() {
    let cli = Cli::try_parse_from(["vela", "env", "ls", "--storage-driver", "memory", "-l", "0"])
        .unwrap();
    assert_eq!(cli.global.storage_driver, Some(StorageDriver::Memory));
    assert_eq!(cli.global.log_level, Some(0));
    assert!(matches!(
        cli.command,
        Some(Command::Env(ref args)) if matches!(args.subcommand, EnvSubcommand::Ls(_))
    ));
}

#[test]
fn cli_config_del_aliases() {
    for alias in ["del", "delete", "rm"] {
        let cli = Cli::try_parse_from(["vela", "config", alias, "app"]).unwrap();
        let Some(Command::Config(args)) = cli.command else {
            panic!("expected config command");
        };
        assert!(matches!(args.subcommand, ConfigSubcommand::Del(ref a) if a.name == "app"));
    }
}

#[test]
fn cli_unknown_subcommand() {
    assert!(Cli::try_parse_from(["vela", "env", "bogus"]).is_err());
}

// =============================================================================
// End to end
// =============================================================================

#[test]
fn cli_env_session() {
    let temp = TempDir::new().unwrap();
    let ctx = memory_context(&temp);

    run(&ctx, &["env", "init", "env1", "--namespace", "test1"]).unwrap();
    assert_eq!(
        run(&ctx, &["env", "ls", "env1"]).unwrap(),
        "NAME\tCURRENT\tNAMESPACE\tEMAIL\tDOMAIN\nenv1\t*      \ttest1    \t     \t      \n"
    );
    assert!(run(&ctx, &["env", "delete", "env1"]).is_err());
    run(&ctx, &["env", "set", "default"]).unwrap();
    assert_eq!(
        run(&ctx, &["env", "delete", "env1"]).unwrap(),
        "environment env1 deleted\n"
    );
    assert!(run(&ctx, &["env", "set", "env1"]).is_err());
}

#[test]
fn cli_config_session() {
    let temp = TempDir::new().unwrap();
    let ctx = memory_context(&temp);

    run(&ctx, &["env", "init", "prod", "--namespace", "apps"]).unwrap();
    run(&ctx, &["env", "set", "default"]).unwrap();

    run(&ctx, &["config", "set", "db", "url=postgres://h/db?sslmode=off", "-e", "prod"]).unwrap();
    assert_eq!(
        run(&ctx, &["config", "get", "db", "-e", "prod"]).unwrap(),
        "Data:\n  url: postgres://h/db?sslmode=off\n"
    );
    assert_eq!(run(&ctx, &["config", "ls"]).unwrap(), "NAME\n");
    assert!(run(&ctx, &["config", "get", "db"]).is_err());
    assert!(run(&ctx, &["config", "ls", "-e", "ghost"]).is_err());
}

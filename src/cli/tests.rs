// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use crate::cli::config::ConfigSubcommand;
use crate::cli::env::EnvSubcommand;
use crate::cli::{Cli, Command};
use crate::config::StorageDriver;
use clap::Parser;

fn env_subcommand(cli: Cli) -> EnvSubcommand {
    match cli.command {
        Some(Command::Env(args)) => args.subcommand,
        other => panic!("expected env command, got {other:?}"),
    }
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["vela", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "vela",
        "--home",
        "/tmp/vela",
        "-l",
        "4",
        "--storage-driver",
        "memory",
        "env",
        "ls",
    ])
    .unwrap();
    assert_eq!(cli.global.home.as_deref(), Some(Path::new("/tmp/vela")));
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.storage_driver, Some(StorageDriver::Memory));
}

#[test]
fn test_parse_rejects_bad_globals() {
    assert!(Cli::try_parse_from(["vela", "-l", "6", "version"]).is_err());
    assert!(Cli::try_parse_from(["vela", "--storage-driver", "etcd", "version"]).is_err());
}

#[test]
fn test_parse_env_init() {
    let cli = Cli::try_parse_from([
        "vela",
        "env",
        "init",
        "prod",
        "--namespace",
        "apps",
        "--email",
        "ops@example.com",
    ])
    .unwrap();
    let EnvSubcommand::Init(args) = env_subcommand(cli) else {
        panic!("expected env init");
    };
    assert_eq!(args.name, "prod");
    assert_eq!(args.namespace.as_deref(), Some("apps"));
    assert_eq!(args.email.as_deref(), Some("ops@example.com"));
    assert!(args.domain.is_none());
}

#[test]
fn test_parse_env_aliases() {
    let cli = Cli::try_parse_from(["vela", "env", "list", "a", "b"]).unwrap();
    let EnvSubcommand::Ls(args) = env_subcommand(cli) else {
        panic!("expected env ls");
    };
    assert_eq!(args.names, ["a", "b"]);

    let cli = Cli::try_parse_from(["vela", "env", "rm", "a"]).unwrap();
    assert!(matches!(env_subcommand(cli), EnvSubcommand::Delete(_)));
}

#[test]
fn test_parse_env_delete_requires_name() {
    assert!(Cli::try_parse_from(["vela", "env", "delete"]).is_err());
}

#[test]
fn test_parse_config_set_with_env() {
    let cli =
        Cli::try_parse_from(["vela", "config", "set", "app", "a=b", "url=x=y", "-e", "prod"]).unwrap();
    let Some(Command::Config(args)) = cli.command else {
        panic!("expected config command");
    };
    assert_eq!(args.env_name(), "prod");
    let ConfigSubcommand::Set(set) = args.subcommand else {
        panic!("expected config set");
    };
    assert_eq!(set.name, "app");
    assert_eq!(set.pairs, ["a=b", "url=x=y"]);
}

#[test]
fn test_parse_config_defaults_to_current_env() {
    let cli = Cli::try_parse_from(["vela", "config", "ls"]).unwrap();
    let Some(Command::Config(args)) = cli.command else {
        panic!("expected config command");
    };
    assert_eq!(args.env_name(), "");
    assert!(matches!(args.subcommand, ConfigSubcommand::Ls));
}

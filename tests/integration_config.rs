// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for settings loading and the config commands.

use tempfile::TempDir;
use vela_env::cli::global::GlobalOptions;
use vela_env::cmd::AppContext;
use vela_env::cmd::config::{
    delete_config, get_config, list_configs, run_options_command, set_config,
};
use vela_env::cmd::context::load_settings;
use vela_env::cmd::env::create_or_update_env;
use vela_env::config::paths::VelaHome;
use vela_env::config::{Settings, StorageDriver};
use vela_env::registry::EnvMeta;

fn open(temp: &TempDir) -> AppContext {
    AppContext::new(VelaHome::new(temp.path()), Settings::default()).unwrap()
}

fn text(out: &[u8]) -> String {
    String::from_utf8(out.to_vec()).unwrap()
}

// =============================================================================
// Settings
// =============================================================================

#[test]
fn settings_parse_full() {
    let settings = Settings::parse(
        r#"
storage_driver = "memory"
default_namespace = "apps"
"#,
    )
    .unwrap();
    assert_eq!(settings.storage_driver, StorageDriver::Memory);
    assert_eq!(settings.default_namespace, "apps");
}

#[test]
fn settings_file_in_home_is_read() {
    let temp = TempDir::new().unwrap();
    let home = VelaHome::new(temp.path());
    std::fs::write(home.settings_file(), "default_namespace = \"apps\"\n").unwrap();

    let global = GlobalOptions {
        storage_driver: Some(StorageDriver::Memory),
        ..GlobalOptions::default()
    };
    let settings = load_settings(&home, &global).unwrap();
    assert_eq!(settings.default_namespace, "apps");
    assert_eq!(settings.storage_driver, StorageDriver::Memory);

    let ctx = AppContext::new(home, settings).unwrap();
    assert_eq!(ctx.envs().get("default").unwrap().namespace, "apps");
}

#[test]
fn settings_invalid_driver_in_file() {
    let temp = TempDir::new().unwrap();
    let home = VelaHome::new(temp.path());
    std::fs::write(home.settings_file(), "storage_driver = \"etcd\"\n").unwrap();

    let global = GlobalOptions {
        storage_driver: Some(StorageDriver::Memory),
        ..GlobalOptions::default()
    };
    // The command-line driver overrides the file value.
    assert!(load_settings(&home, &global).is_ok());
    assert!(load_settings(&home, &GlobalOptions::default()).is_err());
}

#[test]
fn options_command_output() {
    let mut out = Vec::new();
    run_options_command(&Settings::default(), &mut out).unwrap();
    insta::assert_snapshot!(text(&out), @r"
    default_namespace = default
    storage_driver    = local
    ");
}

// =============================================================================
// Config commands
// =============================================================================

#[test]
fn config_set_then_get() {
    let temp = TempDir::new().unwrap();
    let ctx = open(&temp);
    let configs = ctx.configs("").unwrap();

    let mut out = Vec::new();
    set_config(&configs, "c", &["a=b"], &mut out).unwrap();
    assert_eq!(text(&out), "config c created\n");

    out.clear();
    get_config(&configs, "c", &mut out).unwrap();
    assert_eq!(text(&out), "Data:\n  a: b\n");
}

#[test]
fn config_list_then_delete() {
    let temp = TempDir::new().unwrap();
    let ctx = open(&temp);
    let configs = ctx.configs("").unwrap();
    let mut out = Vec::new();
    set_config(&configs, "test", &["a=b"], &mut out).unwrap();
    set_config(&configs, "test2", &["c=d"], &mut out).unwrap();

    out.clear();
    list_configs(&configs, &mut out).unwrap();
    assert_eq!(text(&out), "NAME \ntest \ntest2\n");

    out.clear();
    delete_config(&configs, "test", &mut out).unwrap();
    assert_eq!(text(&out), "config test deleted\n");

    out.clear();
    list_configs(&configs, &mut out).unwrap();
    assert_eq!(text(&out), "NAME \ntest2\n");
}

#[test]
fn config_follows_environment_namespace() {
    let temp = TempDir::new().unwrap();
    let ctx = open(&temp);
    let env1 = EnvMeta::builder().name("env1").namespace("test1").build();
    create_or_update_env(&ctx.envs(), &env1, &mut Vec::new()).unwrap();

    let mut out = Vec::new();
    set_config(&ctx.configs("").unwrap(), "app", &["k=v"], &mut out).unwrap();
    assert!(temp.path().join("store/config/test1/app.json").is_file());

    out.clear();
    list_configs(&ctx.configs("default").unwrap(), &mut out).unwrap();
    assert_eq!(text(&out), "NAME\n");

    out.clear();
    get_config(&ctx.configs("env1").unwrap(), "app", &mut out).unwrap();
    assert_eq!(text(&out), "Data:\n  k: v\n");

    assert!(ctx.configs("ghost").is_err());
}

#[test]
fn config_set_errors() {
    let temp = TempDir::new().unwrap();
    let ctx = open(&temp);
    let configs = ctx.configs("").unwrap();
    let mut out = Vec::new();

    let err = set_config(&configs, "app", &["novalue"], &mut out).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"config error: invalid key/value pair 'novalue', expected key=value"
    );
    assert!(set_config::<&str>(&configs, "app", &[], &mut out).is_err());
    assert!(get_config(&configs, "app", &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn config_namespace_cannot_leave_store() {
    let temp = TempDir::new().unwrap();
    let home_dir = temp.path().join("home");
    let ctx = AppContext::new(VelaHome::new(&home_dir), Settings::default()).unwrap();

    let evil = EnvMeta::builder()
        .name("evil")
        .namespace("../../../escaped")
        .build();
    assert!(create_or_update_env(&ctx.envs(), &evil, &mut Vec::new()).is_err());
    assert!(ctx.configs("evil").is_err());

    let mut out = Vec::new();
    set_config(&ctx.configs("").unwrap(), "app", &["a=b"], &mut out).unwrap();
    assert!(home_dir.join("store/config/default/app.json").is_file());
    assert!(!temp.path().join("escaped").exists());
}

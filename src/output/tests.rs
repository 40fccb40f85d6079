// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Table, render_config_data, render_config_list, render_env_list};
use crate::registry::{ConfigData, EnvMeta};

fn env(name: &str, namespace: &str, current: bool) -> EnvMeta {
    EnvMeta {
        current,
        ..EnvMeta::builder().name(name).namespace(namespace).build()
    }
}

#[test]
fn test_env_list_two_rows() {
    let out = render_env_list(&[env("default", "default", false), env("env1", "test1", true)]);
    assert_eq!(
        out,
        "NAME   \tCURRENT\tNAMESPACE\tEMAIL\tDOMAIN\n\
         default\t       \tdefault  \t     \t      \n\
         env1   \t*      \ttest1    \t     \t      \n"
    );
}

#[test]
fn test_env_list_single_row() {
    let out = render_env_list(&[env("env1", "test1", true)]);
    assert_eq!(
        out,
        "NAME\tCURRENT\tNAMESPACE\tEMAIL\tDOMAIN\nenv1\t*      \ttest1    \t     \t      \n"
    );
}

#[test]
fn test_env_list_with_metadata() {
    let prod = EnvMeta {
        email: "ops@example.com".to_string(),
        domain: "ex.com".to_string(),
        ..env("prod", "apps", true)
    };
    insta::assert_snapshot!(render_env_list(&[prod]).replace('\t', "|"), @r"
    NAME|CURRENT|NAMESPACE|EMAIL          |DOMAIN
    prod|*      |apps     |ops@example.com|ex.com
    ");
}

#[test]
fn test_env_list_empty() {
    assert_eq!(
        render_env_list(&[]),
        "NAME\tCURRENT\tNAMESPACE\tEMAIL\tDOMAIN\n"
    );
}

#[test]
fn test_config_data() {
    let mut data = ConfigData::new();
    data.insert("b".to_string(), "2".to_string());
    data.insert("a".to_string(), "b".to_string());
    assert_eq!(render_config_data(&data), "Data:\n  a: b\n  b: 2\n");
}

#[test]
fn test_config_list() {
    assert_eq!(render_config_list(&["test", "test2"]), "NAME \ntest \ntest2\n");
    assert_eq!(render_config_list(&["test2"]), "NAME \ntest2\n");
    assert_eq!(render_config_list::<&str>(&[]), "NAME\n");
}

#[test]
fn test_table_counts_chars_not_bytes() {
    let mut table = Table::new(["K", "V"]);
    table.add_row(["ü", "x"]);
    table.add_row(["ab", "y"]);
    assert_eq!(table.render(), "K  V\nü  x\nab y\n");
}

#[test]
fn test_table_short_rows_are_padded() {
    let mut table = Table::new(["A", "B"]).with_separator("|");
    table.add_row(["long"]);
    assert_eq!(table.render(), "A   |B\nlong| \n");
}

// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text rendering of registry results.
//!
//! ```text
//! env ls      NAME\tCURRENT\tNAMESPACE\tEMAIL\tDOMAIN   (tab separated)
//! config get  Data:\n  <key>: <value>\n...
//! config ls   NAME\n<name>\n...
//! ```
//!
//! These strings are what scripts parse, so their layout is fixed.

pub mod table;

#[cfg(test)]
mod tests;

use std::fmt::Write as _;

use crate::registry::{ConfigData, EnvMeta};

pub use table::Table;

const ENV_HEADER: [&str; 5] = ["NAME", "CURRENT", "NAMESPACE", "EMAIL", "DOMAIN"];

/// Tab-separated environment table, current marked with `*`.
#[must_use]
pub fn render_env_list(envs: &[EnvMeta]) -> String {
    let mut table = Table::new(ENV_HEADER).with_separator("\t");
    for env in envs {
        table.add_row([
            env.name.as_str(),
            env.current_marker(),
            env.namespace.as_str(),
            env.email.as_str(),
            env.domain.as_str(),
        ]);
    }
    table.render()
}

/// `Data:` followed by one indented `key: value` line per entry.
#[must_use]
pub fn render_config_data(data: &ConfigData) -> String {
    let mut out = String::from("Data:\n");
    for (key, value) in data {
        let _ = writeln!(out, "  {key}: {value}");
    }
    out
}

/// `NAME` header followed by one config name per line.
#[must_use]
pub fn render_config_list<S: AsRef<str>>(names: &[S]) -> String {
    let mut table = Table::new(["NAME"]);
    for name in names {
        table.add_row([name.as_ref()]);
    }
    table.render()
}

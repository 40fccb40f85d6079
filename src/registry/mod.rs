// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment and config registries.
//!
//! ```text
//! EnvRegistry                          ConfigRegistry (per namespace)
//!   init_default  create  get            set  get  list  delete
//!   get_current   list    set_current         |
//!   delete                                    |
//!        |                                    |
//!        +----------------+-------------------+
//!                         v
//!                   &dyn Store
//!   environment/<name>    current/current    config/<ns>/<name>
//! ```
//!
//! The current environment is the one named by the single `current`
//! record. Switching rewrites only that record, guarded by its revision, so
//! no reader ever sees zero or two current environments.

pub mod config;
pub mod env;
pub mod types;


use std::sync::OnceLock;

use regex::Regex;

pub use config::{ConfigRegistry, parse_key_value};
pub use env::{DEFAULT_ENV_NAME, EnvRegistry};
pub use types::{ConfigData, EnvMeta, Upsert};

/// DNS-1123 label: names become store keys and directory names.
const NAME_PATTERN: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$";
const NAME_MAX_LEN: usize = 63;

fn name_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(NAME_PATTERN).expect("name pattern is a valid regex"))
}

/// Checks that `name` is a lowercase DNS label of at most 63 characters.
///
/// # Errors
///
/// Returns a human-readable reason when the name is rejected.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name must not be empty".to_string());
    }
    if name.len() > NAME_MAX_LEN {
        return Err(format!("name must be at most {NAME_MAX_LEN} characters"));
    }
    if !name_regex().is_match(name) {
        return Err(
            "name must consist of lowercase alphanumerics or '-', and start and end with an alphanumeric"
                .to_string(),
        );
    }
    Ok(())
}

// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --home DIR            ← VELA_HOME, then ~/.vela
//! --log-level N         ← Console verbosity (0-5)
//! --log-file FILE       ← Optional log file
//! --storage-driver D    ← STORAGE_DRIVER, then config.toml
//!
//! Precedence: CLI flags > env vars > config.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::StorageDriver;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Home directory holding vela state.
    #[arg(long = "home", value_name = "DIR", env = "VELA_HOME", global = true)]
    pub home: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Storage driver for environment and config records (local, memory).
    #[arg(long = "storage-driver", value_name = "DRIVER", env = "STORAGE_DRIVER", global = true)]
    pub storage_driver: Option<StorageDriver>,
}

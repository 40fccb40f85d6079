// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |             env / config / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |         registry          |
//!              |  environments, configs,   |
//!              |  current pointer (CAS)    |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              store        config   output
//!           local/memory   settings  tables
//!                             paths
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod registry;
pub mod store;
pub mod utility;

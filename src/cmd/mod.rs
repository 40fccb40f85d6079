// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> AppContext::open --> cmd::run_* handlers --> out (io::Write)
//!   env, config, options
//! ```

pub mod config;
pub mod context;
pub mod env;

pub use context::AppContext;

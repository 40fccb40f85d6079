// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities for the local state under the vela home.
//!
//! ```text
//! dir:    ensure_dir()             idempotent create_dir_all (0755)
//!         init_capability_state()  capabilities/ + centers/.tmp/
//!         remove_dir_if_exists()   NotFound is success
//! atomic: write_atomic()           NamedTempFile in target dir, persist
//! ```

pub mod atomic;
pub mod dir;

pub use atomic::write_atomic;
pub use dir::{ensure_dir, init_capability_state, remove_dir_if_exists};

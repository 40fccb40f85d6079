// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   dir:    ensure_dir(), init_capability_state(), remove_dir_if_exists()
//!   atomic: write_atomic()   temp file + rename
//! ```

pub mod fs;

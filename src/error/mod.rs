// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              VelaError (~16 bytes)
//!                     |
//!   +------+------+---+---+------+------+
//!   |      |      |       |      |      |
//!   v      v      v       v      v      v
//!  Env  Config  Store  Settings  Fs     Io
//!  Box   Box     Box     Box     Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Env      NotFound, CannotDeleteCurrent, NoCurrentEnvironment,
//!            InvalidName, InvalidNamespace
//!   Config   NotFound, InvalidKeyValue, EmptyConfig, InvalidName
//!   Store    NotFound, AlreadyExists, Conflict, Unavailable, Corrupt
//!   Settings ParseError, InvalidValue
//!   Fs       HomeUnavailable, NotADirectory, PermissionDenied, IoError
//!
//! All variants boxed => VelaError fits in two words.
//! ```

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`VelaError`].
pub type VelaResult<T> = std::result::Result<T, VelaError>;

/// Top-level error type for registry and store operations.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum VelaError {
    /// Environment registry error.
    #[error("env error: {0}")]
    Env(#[from] Box<EnvError>),

    /// Config registry error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Backing store error.
    #[error("store error: {0}")]
    Store(#[from] Box<StoreError>),

    /// Settings loading error.
    #[error("settings error: {0}")]
    Settings(#[from] Box<SettingsError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl VelaError {
    /// Returns true if this error reports a missing environment, config or
    /// store record.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Env(e) => matches!(**e, EnvError::NotFound { .. }),
            Self::Config(e) => matches!(**e, ConfigError::NotFound { .. }),
            Self::Store(e) => matches!(**e, StoreError::NotFound { .. }),
            _ => false,
        }
    }

    /// Returns the environment error, if this is one.
    #[must_use]
    pub fn as_env(&self) -> Option<&EnvError> {
        match self {
            Self::Env(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the config error, if this is one.
    #[must_use]
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the store error, if this is one.
    #[must_use]
    pub fn as_store(&self) -> Option<&StoreError> {
        match self {
            Self::Store(e) => Some(e),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for VelaError {
                fn from(err: $error) -> Self {
                    VelaError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    EnvError => Env,
    ConfigError => Config,
    StoreError => Store,
    SettingsError => Settings,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Environment Errors ---

/// Environment registry errors.
#[derive(Debug, Error)]
pub enum EnvError {
    /// No environment with that name.
    #[error("environment '{name}' not found")]
    NotFound { name: String },

    /// The registry refuses to delete the current environment.
    #[error(
        "cannot delete the current environment '{name}', switch to another one with `vela env set` first"
    )]
    CannotDeleteCurrent { name: String },

    /// No environment is marked current.
    #[error("no current environment, run `vela env init` or `vela env set` first")]
    NoCurrentEnvironment,

    /// Name is not usable as a record key or directory name.
    #[error("invalid environment name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Namespace is not usable as a store path component.
    #[error("invalid namespace '{namespace}' for environment '{name}': {reason}")]
    InvalidNamespace {
        name: String,
        namespace: String,
        reason: String,
    },
}

// --- Config Errors ---

/// Config registry errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config with that name in the namespace.
    #[error("config '{name}' not found in namespace '{namespace}'")]
    NotFound { namespace: String, name: String },

    /// Input is not of the form `key=value`.
    #[error("invalid key/value pair '{input}', expected key=value")]
    InvalidKeyValue { input: String },

    /// `set` was called without any pairs.
    #[error("config '{name}' needs at least one key=value pair")]
    EmptyConfig { name: String },

    /// Name is not usable as a record key.
    #[error("invalid config name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

// --- Store Errors ---

/// Backing store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record does not exist.
    #[error("{kind} '{name}' not found")]
    NotFound { kind: String, name: String },

    /// Record already exists on create.
    #[error("{kind} '{name}' already exists")]
    AlreadyExists { kind: String, name: String },

    /// Compare-and-swap lost against another writer.
    #[error("{kind} '{name}' was modified concurrently (expected revision {expected}, found {found})")]
    Conflict {
        kind: String,
        name: String,
        expected: u64,
        found: u64,
    },

    /// Backend could not be reached or failed.
    #[error("storage backend unavailable: {message}")]
    Unavailable { message: String },

    /// Stored payload could not be decoded.
    #[error("corrupt {kind} record '{name}': {message}")]
    Corrupt {
        kind: String,
        name: String,
        message: String,
    },
}

// --- Settings Errors ---

/// Settings loading errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings sources could not be merged or deserialized.
    #[error("failed to load settings: {message}")]
    ParseError { message: String },

    /// A setting has an unsupported value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Neither `VELA_HOME` nor a platform user home is available.
    #[error("cannot determine vela home directory: set VELA_HOME or HOME")]
    HomeUnavailable,

    /// Path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised while operating on `path`.
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        let display = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(display),
            std::io::ErrorKind::NotADirectory => Self::NotADirectory(display),
            _ => Self::IoError {
                path: display,
                source,
            },
        }
    }
}

#[cfg(test)]
mod tests;

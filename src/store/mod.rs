// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key-value record store backing the registries.
//!
//! ```text
//!            Store (trait)
//!   create / get / list / update(CAS) / delete
//!        keyed by (Kind, namespace, name)
//!             |                 |
//!             v                 v
//!       MemoryStore        LocalStore
//!    Mutex<BTreeMap>   <home>/store/<kind>/<ns>/<name>.json
//! ```
//!
//! Every write bumps the record's revision. `update` with an expected
//! revision fails with `StoreError::Conflict` if another writer got there
//! first.

pub mod local;
pub mod memory;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::StorageDriver;
use crate::config::paths::VelaHome;
use crate::error::{StoreError, VelaResult};

pub use local::LocalStore;
pub use memory::MemoryStore;

/// Namespace used for records that are not scoped to an environment.
pub const CLUSTER_SCOPE: &str = "";

/// Record kind, separating environments, configs and the current pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Environment,
    Config,
    Current,
}

impl Kind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Config => "config",
            Self::Current => "current",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored record.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    /// Monotonic per-record write counter, starting at 1.
    pub revision: u64,
    pub payload: Value,
}

impl Record {
    /// Deserialize the payload.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the payload does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self, kind: Kind) -> VelaResult<T> {
        serde_json::from_value(self.payload.clone()).map_err(|e| {
            StoreError::Corrupt {
                kind: kind.to_string(),
                name: self.name.clone(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

/// Serialize a payload for storage.
///
/// # Errors
///
/// Returns `StoreError::Corrupt` if `value` cannot be represented as JSON.
pub fn encode<T: Serialize>(kind: Kind, name: &str, value: &T) -> VelaResult<Value> {
    serde_json::to_value(value).map_err(|e| {
        StoreError::Corrupt {
            kind: kind.to_string(),
            name: name.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Backend persisting registry records.
///
/// Implementations block until the backend answers. Backend failures are
/// reported as `StoreError::Unavailable` and never retried here.
pub trait Store: Send + Sync {
    /// Insert a new record. Fails with `StoreError::AlreadyExists` if present.
    ///
    /// # Errors
    ///
    /// `AlreadyExists`, `Unavailable`.
    fn create(&self, kind: Kind, namespace: &str, name: &str, payload: &Value)
    -> VelaResult<Record>;

    /// Fetch one record.
    ///
    /// # Errors
    ///
    /// `NotFound`, `Unavailable`, `Corrupt`.
    fn get(&self, kind: Kind, namespace: &str, name: &str) -> VelaResult<Record>;

    /// All records of `kind` in `namespace`, sorted by name.
    ///
    /// # Errors
    ///
    /// `Unavailable`, `Corrupt`.
    fn list(&self, kind: Kind, namespace: &str) -> VelaResult<Vec<Record>>;

    /// Replace an existing record's payload.
    ///
    /// With `expected_revision` set, the write only happens if the stored
    /// revision still matches.
    ///
    /// # Errors
    ///
    /// `NotFound`, `Conflict`, `Unavailable`.
    fn update(
        &self,
        kind: Kind,
        namespace: &str,
        name: &str,
        payload: &Value,
        expected_revision: Option<u64>,
    ) -> VelaResult<Record>;

    /// Remove a record.
    ///
    /// # Errors
    ///
    /// `NotFound`, `Unavailable`.
    fn delete(&self, kind: Kind, namespace: &str, name: &str) -> VelaResult<()>;
}

/// Open the store selected by `driver`.
#[must_use]
pub fn open_store(driver: StorageDriver, home: &VelaHome) -> Box<dyn Store> {
    tracing::debug!(%driver, root = %home.root().display(), "Opening store");
    match driver {
        StorageDriver::Local => Box::new(LocalStore::new(home.store_dir())),
        StorageDriver::Memory => Box::new(MemoryStore::new()),
    }
}

pub(crate) fn not_found(kind: Kind, name: &str) -> StoreError {
    StoreError::NotFound {
        kind: kind.to_string(),
        name: name.to_string(),
    }
}

pub(crate) fn check_revision(
    kind: Kind,
    name: &str,
    expected: Option<u64>,
    found: u64,
) -> Result<(), StoreError> {
    match expected {
        Some(expected) if expected != found => Err(StoreError::Conflict {
            kind: kind.to_string(),
            name: name.to_string(),
            expected,
            found,
        }),
        _ => Ok(()),
    }
}

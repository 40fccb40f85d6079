// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment registry.
//!
//! ```text
//! {absent} --create--> {exists} <--set_current--> {exists, current}
//!     ^                   |
//!     +------delete-------+      (refused while current)
//! ```

use serde_json::Value;

use super::types::{CurrentPointer, EnvMeta, EnvRecord, Upsert};
use super::validate_name;
use crate::config::DEFAULT_NAMESPACE;
use crate::config::paths::VelaHome;
use crate::error::{EnvError, VelaResult};
use crate::store::{CLUSTER_SCOPE, Kind, Store, encode};
use crate::utility::fs::{ensure_dir, remove_dir_if_exists};

/// Name of the environment bootstrapped by [`EnvRegistry::init_default`].
pub const DEFAULT_ENV_NAME: &str = "default";

const CURRENT_RECORD: &str = "current";

/// Registry of named environments with a single current one.
pub struct EnvRegistry<'a> {
    store: &'a dyn Store,
    home: Option<VelaHome>,
    default_namespace: String,
}

impl<'a> EnvRegistry<'a> {
    /// Registry over `store` with no local directory bootstrap.
    #[must_use]
    pub fn new(store: &'a dyn Store) -> Self {
        Self {
            store,
            home: None,
            default_namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Create `envs/<name>/` under `home` for every created environment.
    #[must_use]
    pub fn with_home(mut self, home: VelaHome) -> Self {
        self.home = Some(home);
        self
    }

    /// Namespace given to environments created without one.
    #[must_use]
    pub fn with_default_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.default_namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn store(&self) -> &'a dyn Store {
        self.store
    }

    /// Creates the `default` environment if the registry is empty.
    ///
    /// Returns `true` if it created one.
    ///
    /// # Errors
    ///
    /// Propagates store and filesystem errors.
    pub fn init_default(&self) -> VelaResult<bool> {
        if !self.store.list(Kind::Environment, CLUSTER_SCOPE)?.is_empty() {
            return Ok(false);
        }
        let meta = EnvMeta::builder()
            .name(DEFAULT_ENV_NAME)
            .namespace(self.default_namespace.as_str())
            .build();
        self.create(&meta)?;
        tracing::info!(env = DEFAULT_ENV_NAME, "Initialized default environment");
        Ok(true)
    }

    /// Creates `meta.name`, or merges into it if it exists, and makes it
    /// current.
    ///
    /// Empty fields in `meta` keep the stored values on update. A new
    /// environment without a namespace gets the default namespace.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::InvalidName` or `EnvError::InvalidNamespace` before
    /// anything is written, and propagates store errors. If the switch to
    /// the environment fails, a created record is removed, an updated one is
    /// restored, and a directory made by this call is removed again.
    pub fn create(&self, meta: &EnvMeta) -> VelaResult<Upsert<EnvMeta>> {
        validate_name(&meta.name).map_err(|reason| EnvError::InvalidName {
            name: meta.name.clone(),
            reason,
        })?;

        let existing = self.find(&meta.name)?;
        let record = match &existing {
            Some((stored, _)) => {
                let mut record = stored.clone();
                record.merge(meta);
                record
            }
            None => EnvRecord::from_meta(meta, &self.default_namespace),
        };
        validate_name(&record.namespace).map_err(|reason| EnvError::InvalidNamespace {
            name: meta.name.clone(),
            namespace: record.namespace.clone(),
            reason,
        })?;

        let dir_existed = match &self.home {
            Some(home) => ensure_dir(&home.env_dir(&meta.name))?,
            None => true,
        };
        if let Err(e) = self.write_and_switch(&meta.name, &record, existing.as_ref()) {
            if !dir_existed
                && let Some(home) = &self.home
                && let Err(cleanup) = remove_dir_if_exists(&home.env_dir(&meta.name))
            {
                tracing::warn!(env = %meta.name, error = %cleanup, "Failed to remove environment directory");
            }
            return Err(e);
        }
        let created = existing.is_none();

        let env = record.into_meta(&meta.name, true);
        tracing::info!(
            env = %env.name,
            namespace = %env.namespace,
            created,
            "Environment is now current"
        );
        Ok(if created {
            Upsert::Created(env)
        } else {
            Upsert::Updated(env)
        })
    }

    /// Fetches an environment; an empty `name` means the current one.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::NotFound` if the registry is empty or the name is
    /// unknown, `EnvError::NoCurrentEnvironment` if `name` is empty and no
    /// environment is current.
    pub fn get(&self, name: &str) -> VelaResult<EnvMeta> {
        if name.is_empty() {
            if self.store.list(Kind::Environment, CLUSTER_SCOPE)?.is_empty() {
                return Err(EnvError::NotFound {
                    name: DEFAULT_ENV_NAME.to_string(),
                }
                .into());
            }
            return self.get_current();
        }

        let (record, _) = self.find(name)?.ok_or_else(|| not_found(name))?;
        let current = self.current_name()?.as_deref() == Some(name);
        Ok(record.into_meta(name, current))
    }

    /// Fetches the current environment.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::NoCurrentEnvironment` if no environment is current
    /// or the pointer names an environment that no longer exists.
    pub fn get_current(&self) -> VelaResult<EnvMeta> {
        let (pointer, _) = self
            .read_pointer()?
            .ok_or(EnvError::NoCurrentEnvironment)?;
        match self.find(&pointer.name)? {
            Some((record, _)) => Ok(record.into_meta(&pointer.name, true)),
            None => {
                tracing::warn!(env = %pointer.name, "Current pointer names a missing environment");
                Err(EnvError::NoCurrentEnvironment.into())
            }
        }
    }

    /// Lists environments sorted by name, restricted to `filter` unless it
    /// is empty. Unknown names in `filter` are skipped.
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    pub fn list<S: AsRef<str>>(&self, filter: &[S]) -> VelaResult<Vec<EnvMeta>> {
        let current = self.current_name()?;
        let mut envs = Vec::new();
        for record in self.store.list(Kind::Environment, CLUSTER_SCOPE)? {
            if !filter.is_empty() && !filter.iter().any(|f| f.as_ref() == record.name) {
                continue;
            }
            let stored: EnvRecord = record.decode(Kind::Environment)?;
            let is_current = current.as_deref() == Some(record.name.as_str());
            envs.push(stored.into_meta(&record.name, is_current));
        }
        envs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(envs)
    }

    /// Makes `name` the current environment.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::NotFound` for unknown names (the current
    /// environment is left alone) and `StoreError::Conflict` if another
    /// writer switched concurrently.
    pub fn set_current(&self, name: &str) -> VelaResult<EnvMeta> {
        let (record, _) = self.find(name)?.ok_or_else(|| not_found(name))?;
        self.point_to(name)?;
        tracing::info!(env = %name, namespace = %record.namespace, "Switched environment");
        Ok(record.into_meta(name, true))
    }

    /// Deletes a non-current environment and its local directory.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::CannotDeleteCurrent` for the current environment and
    /// `EnvError::NotFound` for unknown names.
    pub fn delete(&self, name: &str) -> VelaResult<()> {
        if validate_name(name).is_err() {
            return Err(not_found(name).into());
        }
        if self.current_name()?.as_deref() == Some(name) {
            return Err(EnvError::CannotDeleteCurrent {
                name: name.to_string(),
            }
            .into());
        }

        match self.store.delete(Kind::Environment, CLUSTER_SCOPE, name) {
            Ok(()) => {}
            Err(e) if e.is_not_found() => return Err(not_found(name).into()),
            Err(e) => return Err(e),
        }

        if let Some(home) = &self.home
            && let Err(e) = remove_dir_if_exists(&home.env_dir(name))
        {
            tracing::warn!(env = %name, error = %e, "Failed to remove environment directory");
        }
        tracing::info!(env = %name, "Deleted environment");
        Ok(())
    }

    /// Name of the current environment, if any.
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    pub fn current_name(&self) -> VelaResult<Option<String>> {
        Ok(self.read_pointer()?.map(|(pointer, _)| pointer.name))
    }

    fn find(&self, name: &str) -> VelaResult<Option<(EnvRecord, u64)>> {
        if validate_name(name).is_err() {
            return Ok(None);
        }
        match self.store.get(Kind::Environment, CLUSTER_SCOPE, name) {
            Ok(record) => Ok(Some((record.decode(Kind::Environment)?, record.revision))),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Writes `record`, then moves the pointer to `name`. A failed switch
    /// undoes the record write.
    fn write_and_switch(
        &self,
        name: &str,
        record: &EnvRecord,
        existing: Option<&(EnvRecord, u64)>,
    ) -> VelaResult<()> {
        let payload = encode(Kind::Environment, name, record)?;
        let Some((previous, revision)) = existing else {
            self.store
                .create(Kind::Environment, CLUSTER_SCOPE, name, &payload)?;
            return self.point_to(name).inspect_err(|_| {
                if let Err(rollback) = self.store.delete(Kind::Environment, CLUSTER_SCOPE, name) {
                    tracing::warn!(env = %name, error = %rollback, "Failed to roll back environment");
                }
            });
        };

        let written = self.store.update(
            Kind::Environment,
            CLUSTER_SCOPE,
            name,
            &payload,
            Some(*revision),
        )?;
        self.point_to(name).inspect_err(|_| {
            let restored = encode(Kind::Environment, name, previous).and_then(|payload| {
                self.store.update(
                    Kind::Environment,
                    CLUSTER_SCOPE,
                    name,
                    &payload,
                    Some(written.revision),
                )
            });
            if let Err(rollback) = restored {
                tracing::warn!(env = %name, error = %rollback, "Failed to restore environment");
            }
        })
    }

    fn read_pointer(&self) -> VelaResult<Option<(CurrentPointer, u64)>> {
        match self.store.get(Kind::Current, CLUSTER_SCOPE, CURRENT_RECORD) {
            Ok(record) => Ok(Some((record.decode(Kind::Current)?, record.revision))),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Single write to the pointer record, compare-and-swap on its revision.
    fn point_to(&self, name: &str) -> VelaResult<()> {
        let payload: Value = encode(
            Kind::Current,
            CURRENT_RECORD,
            &CurrentPointer {
                name: name.to_string(),
            },
        )?;
        match self.read_pointer()? {
            Some((_, revision)) => {
                self.store.update(
                    Kind::Current,
                    CLUSTER_SCOPE,
                    CURRENT_RECORD,
                    &payload,
                    Some(revision),
                )?;
            }
            None => {
                self.store
                    .create(Kind::Current, CLUSTER_SCOPE, CURRENT_RECORD, &payload)?;
            }
        }
        Ok(())
    }
}

fn not_found(name: &str) -> EnvError {
    EnvError::NotFound {
        name: name.to_string(),
    }
}

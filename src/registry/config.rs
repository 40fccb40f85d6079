// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config registry, scoped to one environment namespace.

use super::env::EnvRegistry;
use super::types::{ConfigData, ConfigRecord, Upsert};
use super::validate_name;
use crate::error::{ConfigError, EnvError, VelaResult};
use crate::store::{Kind, Store, encode};

/// Splits `input` on its first `=`.
///
/// Values may contain further `=` characters. Keys are case-sensitive.
///
/// # Errors
///
/// Returns `ConfigError::InvalidKeyValue` if there is no `=` or the key is
/// empty.
pub fn parse_key_value(input: &str) -> VelaResult<(String, String)> {
    match input.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(ConfigError::InvalidKeyValue {
            input: input.to_string(),
        }
        .into()),
    }
}

/// Named key/value records in one namespace.
pub struct ConfigRegistry<'a> {
    store: &'a dyn Store,
    namespace: String,
}

impl<'a> ConfigRegistry<'a> {
    #[must_use]
    pub fn new(store: &'a dyn Store, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    /// Registry for the namespace of environment `env_name` (empty = current).
    ///
    /// # Errors
    ///
    /// Propagates [`EnvRegistry::get`] errors, and returns
    /// `EnvError::InvalidNamespace` if the stored namespace is not a valid
    /// label.
    pub fn for_env(envs: &EnvRegistry<'a>, env_name: &str) -> VelaResult<Self> {
        let env = envs.get(env_name)?;
        validate_name(&env.namespace).map_err(|reason| EnvError::InvalidNamespace {
            name: env.name.clone(),
            namespace: env.namespace.clone(),
            reason,
        })?;
        Ok(Self::new(envs.store(), env.namespace))
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Merges `pairs` (`key=value` strings) into config `name`, creating it if
    /// needed. Existing keys are overwritten.
    ///
    /// All pairs are parsed before anything is written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKeyValue` for malformed pairs,
    /// `ConfigError::EmptyConfig` when `pairs` is empty,
    /// `ConfigError::InvalidName` for unusable names, and propagates store
    /// errors.
    pub fn set<S: AsRef<str>>(&self, name: &str, pairs: &[S]) -> VelaResult<Upsert<ConfigData>> {
        validate_name(name).map_err(|reason| ConfigError::InvalidName {
            name: name.to_string(),
            reason,
        })?;
        let parsed = pairs
            .iter()
            .map(|pair| parse_key_value(pair.as_ref()))
            .collect::<VelaResult<Vec<_>>>()?;
        if parsed.is_empty() {
            return Err(ConfigError::EmptyConfig {
                name: name.to_string(),
            }
            .into());
        }

        let outcome = match self.find(name)? {
            Some((mut record, revision)) => {
                record.data.extend(parsed);
                let payload = encode(Kind::Config, name, &record)?;
                self.store
                    .update(Kind::Config, &self.namespace, name, &payload, Some(revision))?;
                Upsert::Updated(record.data)
            }
            None => {
                let record = ConfigRecord {
                    data: parsed.into_iter().collect(),
                };
                let payload = encode(Kind::Config, name, &record)?;
                self.store
                    .create(Kind::Config, &self.namespace, name, &payload)?;
                Upsert::Created(record.data)
            }
        };

        tracing::info!(
            config = %name,
            namespace = %self.namespace,
            keys = outcome.get().len(),
            "Config {}",
            outcome.verb()
        );
        Ok(outcome)
    }

    /// Returns the data of config `name`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if it does not exist here.
    pub fn get(&self, name: &str) -> VelaResult<ConfigData> {
        self.find(name)?
            .map(|(record, _)| record.data)
            .ok_or_else(|| self.not_found(name).into())
    }

    /// Names of all configs in this namespace, sorted.
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    pub fn list(&self) -> VelaResult<Vec<String>> {
        let mut names: Vec<String> = self
            .store
            .list(Kind::Config, &self.namespace)?
            .into_iter()
            .map(|record| record.name)
            .collect();
        names.sort();
        Ok(names)
    }

    /// Removes config `name`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if it does not exist here.
    pub fn delete(&self, name: &str) -> VelaResult<()> {
        if validate_name(name).is_err() {
            return Err(self.not_found(name).into());
        }
        match self.store.delete(Kind::Config, &self.namespace, name) {
            Ok(()) => {
                tracing::info!(config = %name, namespace = %self.namespace, "Deleted config");
                Ok(())
            }
            Err(e) if e.is_not_found() => Err(self.not_found(name).into()),
            Err(e) => Err(e),
        }
    }

    fn find(&self, name: &str) -> VelaResult<Option<(ConfigRecord, u64)>> {
        if validate_name(name).is_err() {
            return Ok(None);
        }
        match self.store.get(Kind::Config, &self.namespace, name) {
            Ok(record) => Ok(Some((record.decode(Kind::Config)?, record.revision))),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn not_found(&self, name: &str) -> ConfigError {
        ConfigError::NotFound {
            namespace: self.namespace.clone(),
            name: name.to_string(),
        }
    }
}

// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-process store.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

use super::{Kind, Record, Store, check_revision, not_found};
use crate::error::{StoreError, VelaResult};

type Key = (Kind, String, String);

/// Store keeping every record in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<Key, (u64, Value)>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> VelaResult<MutexGuard<'_, BTreeMap<Key, (u64, Value)>>> {
        self.records.lock().map_err(|_| {
            StoreError::Unavailable {
                message: "memory store lock poisoned".to_string(),
            }
            .into()
        })
    }
}

fn key(kind: Kind, namespace: &str, name: &str) -> Key {
    (kind, namespace.to_string(), name.to_string())
}

impl Store for MemoryStore {
    fn create(
        &self,
        kind: Kind,
        namespace: &str,
        name: &str,
        payload: &Value,
    ) -> VelaResult<Record> {
        let mut records = self.lock()?;
        let key = key(kind, namespace, name);
        if records.contains_key(&key) {
            return Err(StoreError::AlreadyExists {
                kind: kind.to_string(),
                name: name.to_string(),
            }
            .into());
        }
        records.insert(key, (1, payload.clone()));
        Ok(Record {
            name: name.to_string(),
            revision: 1,
            payload: payload.clone(),
        })
    }

    fn get(&self, kind: Kind, namespace: &str, name: &str) -> VelaResult<Record> {
        let records = self.lock()?;
        records
            .get(&key(kind, namespace, name))
            .map(|(revision, payload)| Record {
                name: name.to_string(),
                revision: *revision,
                payload: payload.clone(),
            })
            .ok_or_else(|| not_found(kind, name).into())
    }

    fn list(&self, kind: Kind, namespace: &str) -> VelaResult<Vec<Record>> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .filter(|((k, ns, _), _)| *k == kind && ns == namespace)
            .map(|((_, _, name), (revision, payload))| Record {
                name: name.clone(),
                revision: *revision,
                payload: payload.clone(),
            })
            .collect())
    }

    fn update(
        &self,
        kind: Kind,
        namespace: &str,
        name: &str,
        payload: &Value,
        expected_revision: Option<u64>,
    ) -> VelaResult<Record> {
        let mut records = self.lock()?;
        let entry = records
            .get_mut(&key(kind, namespace, name))
            .ok_or_else(|| not_found(kind, name))?;
        check_revision(kind, name, expected_revision, entry.0)?;
        entry.0 += 1;
        entry.1 = payload.clone();
        Ok(Record {
            name: name.to_string(),
            revision: entry.0,
            payload: payload.clone(),
        })
    }

    fn delete(&self, kind: Kind, namespace: &str, name: &str) -> VelaResult<()> {
        let mut records = self.lock()?;
        records
            .remove(&key(kind, namespace, name))
            .map(|_| ())
            .ok_or_else(|| not_found(kind, name).into())
    }
}

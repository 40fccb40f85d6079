// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem store.
//!
//! ```text
//! <root>/
//!   environment/<name>.json
//!   current/current.json
//!   config/<namespace>/<name>.json
//!
//! file: {"revision": 3, "payload": {...}}
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Kind, Record, Store, check_revision, not_found};
use crate::error::{StoreError, VelaError, VelaResult};
use crate::utility::fs::write_atomic;

#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    revision: u64,
    payload: Value,
}

/// Store writing one JSON file per record.
#[derive(Debug)]
pub struct LocalStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn dir(&self, kind: Kind, namespace: &str) -> PathBuf {
        let dir = self.root.join(kind.as_str());
        if namespace.is_empty() {
            dir
        } else {
            dir.join(namespace)
        }
    }

    fn path(&self, kind: Kind, namespace: &str, name: &str) -> PathBuf {
        self.dir(kind, namespace).join(format!("{name}.json"))
    }

    fn lock(&self) -> VelaResult<MutexGuard<'_, ()>> {
        self.write_lock.lock().map_err(|_| {
            StoreError::Unavailable {
                message: "local store lock poisoned".to_string(),
            }
            .into()
        })
    }

    fn read(&self, kind: Kind, namespace: &str, name: &str) -> VelaResult<Option<StoredRecord>> {
        let path = self.path(kind, namespace, name);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(unavailable(&path, &e)),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| {
                StoreError::Corrupt {
                    kind: kind.to_string(),
                    name: name.to_string(),
                    message: e.to_string(),
                }
                .into()
            })
    }

    fn write(
        &self,
        kind: Kind,
        namespace: &str,
        name: &str,
        record: &StoredRecord,
    ) -> VelaResult<()> {
        let path = self.path(kind, namespace, name);
        let bytes = serde_json::to_vec_pretty(record).map_err(|e| StoreError::Corrupt {
            kind: kind.to_string(),
            name: name.to_string(),
            message: e.to_string(),
        })?;
        write_atomic(&path, &bytes).map_err(|e| StoreError::Unavailable {
            message: e.to_string(),
        })?;
        Ok(())
    }
}

fn unavailable(path: &Path, err: &std::io::Error) -> VelaError {
    StoreError::Unavailable {
        message: format!("{}: {err}", path.display()),
    }
    .into()
}

impl Store for LocalStore {
    fn create(
        &self,
        kind: Kind,
        namespace: &str,
        name: &str,
        payload: &Value,
    ) -> VelaResult<Record> {
        let _guard = self.lock()?;
        if self.read(kind, namespace, name)?.is_some() {
            return Err(StoreError::AlreadyExists {
                kind: kind.to_string(),
                name: name.to_string(),
            }
            .into());
        }
        let stored = StoredRecord {
            revision: 1,
            payload: payload.clone(),
        };
        self.write(kind, namespace, name, &stored)?;
        Ok(Record {
            name: name.to_string(),
            revision: stored.revision,
            payload: stored.payload,
        })
    }

    fn get(&self, kind: Kind, namespace: &str, name: &str) -> VelaResult<Record> {
        let stored = self
            .read(kind, namespace, name)?
            .ok_or_else(|| not_found(kind, name))?;
        Ok(Record {
            name: name.to_string(),
            revision: stored.revision,
            payload: stored.payload,
        })
    }

    fn list(&self, kind: Kind, namespace: &str) -> VelaResult<Vec<Record>> {
        let dir = self.dir(kind, namespace);
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(unavailable(&dir, &e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| unavailable(&dir, &e))?.path();
            if path.is_file()
                && path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(stem.to_string());
            }
        }
        names.sort();

        let mut records = Vec::with_capacity(names.len());
        for name in names {
            // A file removed between read_dir and read is simply skipped.
            if let Some(stored) = self.read(kind, namespace, &name)? {
                records.push(Record {
                    name,
                    revision: stored.revision,
                    payload: stored.payload,
                });
            }
        }
        Ok(records)
    }

    fn update(
        &self,
        kind: Kind,
        namespace: &str,
        name: &str,
        payload: &Value,
        expected_revision: Option<u64>,
    ) -> VelaResult<Record> {
        let _guard = self.lock()?;
        let current = self
            .read(kind, namespace, name)?
            .ok_or_else(|| not_found(kind, name))?;
        check_revision(kind, name, expected_revision, current.revision)?;
        let stored = StoredRecord {
            revision: current.revision + 1,
            payload: payload.clone(),
        };
        self.write(kind, namespace, name, &stored)?;
        Ok(Record {
            name: name.to_string(),
            revision: stored.revision,
            payload: stored.payload,
        })
    }

    fn delete(&self, kind: Kind, namespace: &str, name: &str) -> VelaResult<()> {
        let _guard = self.lock()?;
        let path = self.path(kind, namespace, name);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(not_found(kind, name).into()),
            Err(e) => Err(unavailable(&path, &e)),
        }
    }
}

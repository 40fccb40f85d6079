// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use serde_json::json;
use tempfile::TempDir;

use super::{CLUSTER_SCOPE, Kind, LocalStore, MemoryStore, Store, open_store};
use crate::config::StorageDriver;
use crate::config::paths::VelaHome;
use crate::error::{StoreError, VelaError};

fn store_error(err: &VelaError) -> &StoreError {
    err.as_store().expect("expected a store error")
}

fn exercise_crud(store: &dyn Store) {
    let created = store
        .create(Kind::Config, "apps", "db", &json!({"data": {"a": "b"}}))
        .unwrap();
    assert_eq!(created.revision, 1);

    let err = store
        .create(Kind::Config, "apps", "db", &json!({}))
        .unwrap_err();
    assert!(matches!(store_error(&err), StoreError::AlreadyExists { .. }));

    let fetched = store.get(Kind::Config, "apps", "db").unwrap();
    assert_eq!(fetched.payload, json!({"data": {"a": "b"}}));

    // Same name in another namespace or kind is a different record.
    assert!(store.get(Kind::Config, "other", "db").unwrap_err().is_not_found());
    assert!(
        store
            .get(Kind::Environment, CLUSTER_SCOPE, "db")
            .unwrap_err()
            .is_not_found()
    );

    let updated = store
        .update(Kind::Config, "apps", "db", &json!({"data": {}}), Some(1))
        .unwrap();
    assert_eq!(updated.revision, 2);

    let err = store
        .update(Kind::Config, "apps", "db", &json!({}), Some(1))
        .unwrap_err();
    assert!(matches!(
        store_error(&err),
        StoreError::Conflict {
            expected: 1,
            found: 2,
            ..
        }
    ));

    store.delete(Kind::Config, "apps", "db").unwrap();
    assert!(store.delete(Kind::Config, "apps", "db").unwrap_err().is_not_found());
    assert!(
        store
            .update(Kind::Config, "apps", "db", &json!({}), None)
            .unwrap_err()
            .is_not_found()
    );
}

fn exercise_list(store: &dyn Store) {
    assert!(store.list(Kind::Environment, CLUSTER_SCOPE).unwrap().is_empty());

    for name in ["zeta", "alpha", "mid"] {
        store
            .create(Kind::Environment, CLUSTER_SCOPE, name, &json!({"namespace": name}))
            .unwrap();
    }
    store
        .create(Kind::Config, "alpha", "cfg", &json!({}))
        .unwrap();

    let names: Vec<String> = store
        .list(Kind::Environment, CLUSTER_SCOPE)
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, ["alpha", "mid", "zeta"]);
}

#[test]
fn test_memory_store_crud() {
    exercise_crud(&MemoryStore::new());
}

#[test]
fn test_memory_store_list() {
    exercise_list(&MemoryStore::new());
}

#[test]
fn test_local_store_crud() {
    let temp = TempDir::new().unwrap();
    exercise_crud(&LocalStore::new(temp.path()));
}

#[test]
fn test_local_store_list() {
    let temp = TempDir::new().unwrap();
    exercise_list(&LocalStore::new(temp.path()));
}

#[test]
fn test_local_store_survives_reopen() {
    let temp = TempDir::new().unwrap();
    LocalStore::new(temp.path())
        .create(Kind::Current, CLUSTER_SCOPE, "current", &json!({"name": "prod"}))
        .unwrap();

    let reopened = LocalStore::new(temp.path());
    let record = reopened.get(Kind::Current, CLUSTER_SCOPE, "current").unwrap();
    assert_eq!(record.payload, json!({"name": "prod"}));
    assert!(temp.path().join("current/current.json").is_file());
}

#[test]
fn test_local_store_corrupt_file() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("environment")).unwrap();
    std::fs::write(temp.path().join("environment/bad.json"), "{not json").unwrap();

    let store = LocalStore::new(temp.path());
    let err = store.get(Kind::Environment, CLUSTER_SCOPE, "bad").unwrap_err();
    assert!(matches!(store_error(&err), StoreError::Corrupt { .. }));
}

#[test]
fn test_local_store_ignores_foreign_files() {
    let temp = TempDir::new().unwrap();
    let store = LocalStore::new(temp.path());
    store
        .create(Kind::Environment, CLUSTER_SCOPE, "prod", &json!({}))
        .unwrap();
    std::fs::write(temp.path().join("environment/notes.txt"), "hi").unwrap();

    let records = store.list(Kind::Environment, CLUSTER_SCOPE).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_open_store_memory() {
    let home = VelaHome::new("/unused");
    let store = open_store(StorageDriver::Memory, &home);
    store
        .create(Kind::Environment, CLUSTER_SCOPE, "x", &json!({}))
        .unwrap();
    assert_eq!(store.list(Kind::Environment, CLUSTER_SCOPE).unwrap().len(), 1);
}

// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{ConfigError, EnvError, FsError, StoreError, VelaError, VelaResult};

#[test]
fn test_env_error_display() {
    let err = EnvError::CannotDeleteCurrent {
        name: "prod".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"cannot delete the current environment 'prod', switch to another one with `vela env set` first"
    );
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidKeyValue {
        input: "novalue".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"invalid key/value pair 'novalue', expected key=value");
}

#[test]
fn test_boxed_conversion_keeps_message() {
    let err: VelaError = StoreError::Unavailable {
        message: "connection refused".to_string(),
    }
    .into();
    insta::assert_snapshot!(
        err.to_string(),
        @"store error: storage backend unavailable: connection refused"
    );
}

#[test]
fn test_is_not_found() {
    let env: VelaError = EnvError::NotFound {
        name: "a".to_string(),
    }
    .into();
    let config: VelaError = ConfigError::NotFound {
        namespace: "default".to_string(),
        name: "b".to_string(),
    }
    .into();
    let other: VelaError = EnvError::NoCurrentEnvironment.into();

    assert!(env.is_not_found());
    assert!(config.is_not_found());
    assert!(!other.is_not_found());
}

#[test]
fn test_fs_error_classification() {
    let denied = FsError::from_io(
        Path::new("/root/x"),
        std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    );
    assert!(matches!(denied, FsError::PermissionDenied(ref p) if p == "/root/x"));

    let other = FsError::from_io(
        Path::new("/tmp/y"),
        std::io::Error::from(std::io::ErrorKind::Other),
    );
    assert!(matches!(other, FsError::IoError { .. }));
}

#[test]
fn test_vela_error_size() {
    // Every variant holds a thin Box, plus the discriminant
    let size = std::mem::size_of::<VelaError>();
    assert!(size <= 24, "VelaError is {size} bytes, expected <= 24");
}

#[test]
fn test_vela_result_size() {
    let size = std::mem::size_of::<VelaResult<()>>();
    assert!(size <= 24, "VelaResult<()> is {size} bytes, expected <= 24");
}

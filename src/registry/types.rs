// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry data types.

use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Key/value data of a config, displayed in key order.
pub type ConfigData = BTreeMap<String, String>;

/// An environment as seen by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct EnvMeta {
    pub name: String,
    #[builder(default)]
    pub namespace: String,
    #[builder(default)]
    pub email: String,
    #[builder(default)]
    pub domain: String,
    /// Derived from the current pointer, never stored on the record.
    #[serde(skip)]
    #[builder(default)]
    pub current: bool,
}

impl EnvMeta {
    /// `*` for the current environment, empty otherwise.
    #[must_use]
    pub const fn current_marker(&self) -> &'static str {
        if self.current { "*" } else { "" }
    }
}

/// Persisted form of an environment; the name is the record key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct EnvRecord {
    pub(crate) namespace: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub(crate) email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub(crate) domain: String,
}

impl EnvRecord {
    pub(crate) fn from_meta(meta: &EnvMeta, default_namespace: &str) -> Self {
        let namespace = if meta.namespace.is_empty() {
            default_namespace.to_string()
        } else {
            meta.namespace.clone()
        };
        Self {
            namespace,
            email: meta.email.clone(),
            domain: meta.domain.clone(),
        }
    }

    /// Fields set in `meta` replace the stored ones; empty fields keep them.
    pub(crate) fn merge(&mut self, meta: &EnvMeta) {
        let replace = |field: &mut String, incoming: &str| {
            if !incoming.is_empty() {
                *field = incoming.to_string();
            }
        };
        replace(&mut self.namespace, &meta.namespace);
        replace(&mut self.email, &meta.email);
        replace(&mut self.domain, &meta.domain);
    }

    pub(crate) fn into_meta(self, name: &str, current: bool) -> EnvMeta {
        EnvMeta {
            name: name.to_string(),
            namespace: self.namespace,
            email: self.email,
            domain: self.domain,
            current,
        }
    }
}

/// Pointer record naming the current environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct CurrentPointer {
    pub(crate) name: String,
}

/// Persisted form of a config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ConfigRecord {
    #[serde(default)]
    pub(crate) data: ConfigData,
}

/// Outcome of an insert-or-merge operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upsert<T> {
    /// No record existed; a new one was written.
    Created(T),
    /// An existing record was merged with the input.
    Updated(T),
}

impl<T> Upsert<T> {
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    #[must_use]
    pub const fn get(&self) -> &T {
        match self {
            Self::Created(value) | Self::Updated(value) => value,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> T {
        match self {
            Self::Created(value) | Self::Updated(value) => value,
        }
    }

    /// Past-tense verb for user-facing messages.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Updated(_) => "updated",
        }
    }
}

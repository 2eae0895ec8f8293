//! Record type.
//!
//! A named, namespaced collection of key to byte-sequence pairs.

use crate::core::types::{SecretData, SecretValue};

/// A secret record as held by a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Record name, unique within its namespace
    pub name: String,
    /// Namespace the record lives in
    pub namespace: String,
    /// Store-issued classification (e.g. `Opaque`). Display only.
    pub kind: String,
    /// Key-value payload
    pub data: SecretData,
}

impl Record {
    /// Create an empty record with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style namespace setter.
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Builder-style kind setter.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Builder-style entry insertion.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<SecretValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.data.get(key).map(Vec::as_slice)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

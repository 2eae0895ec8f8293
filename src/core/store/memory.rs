//! In-memory secret store.
//!
//! Keeps records in insertion order and logs every call, which makes it
//! the test double for the merge engine and the command handlers.

use std::cell::RefCell;

use super::SecretStore;
use crate::core::constants::DEFAULT_KIND;
use crate::core::domain::Record;
use crate::error::StoreError;

/// One recorded store call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Get { namespace: String, name: String },
    List { namespace: String },
    Create { namespace: String, record: Record },
    Update { namespace: String, record: Record },
}

/// Store backed by a vector of records.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<Record>>,
    calls: RefCell<Vec<Call>>,
    default_namespace: Option<String>,
    failure: Option<String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Set the namespace reported as the store default.
    pub fn with_default_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.default_namespace = Some(namespace.into());
        self
    }

    /// Seed a record into `namespace`.
    pub fn with_record(self, namespace: &str, record: Record) -> Self {
        self.records
            .borrow_mut()
            .push(record.in_namespace(namespace));
        self
    }

    /// Every call made so far, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Snapshot of one stored record.
    pub fn record(&self, namespace: &str, name: &str) -> Option<Record> {
        self.records
            .borrow()
            .iter()
            .find(|r| r.namespace == namespace && r.name == name)
            .cloned()
    }

    fn check(&self, call: Call) -> Result<(), StoreError> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(message) => Err(StoreError::Backend(message.clone())),
            None => Ok(()),
        }
    }
}

impl SecretStore for MemoryStore {
    fn default_namespace(&self) -> Option<String> {
        self.default_namespace.clone()
    }

    fn get(&self, namespace: &str, name: &str) -> Result<Record, StoreError> {
        self.check(Call::Get {
            namespace: namespace.to_string(),
            name: name.to_string(),
        })?;

        self.record(namespace, name)
            .ok_or_else(|| StoreError::NotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
    }

    fn list(&self, namespace: &str) -> Result<Vec<Record>, StoreError> {
        self.check(Call::List {
            namespace: namespace.to_string(),
        })?;

        Ok(self
            .records
            .borrow()
            .iter()
            .filter(|r| r.namespace == namespace)
            .cloned()
            .collect())
    }

    fn create(&self, namespace: &str, record: &Record) -> Result<Record, StoreError> {
        self.check(Call::Create {
            namespace: namespace.to_string(),
            record: record.clone(),
        })?;

        if self.record(namespace, &record.name).is_some() {
            return Err(StoreError::AlreadyExists {
                namespace: namespace.to_string(),
                name: record.name.clone(),
            });
        }

        let mut stored = record.clone().in_namespace(namespace);
        if stored.kind.is_empty() {
            stored.kind = DEFAULT_KIND.to_string();
        }
        self.records.borrow_mut().push(stored.clone());
        Ok(stored)
    }

    fn update(&self, namespace: &str, record: &Record) -> Result<Record, StoreError> {
        self.check(Call::Update {
            namespace: namespace.to_string(),
            record: record.clone(),
        })?;

        let mut records = self.records.borrow_mut();
        let slot = records
            .iter_mut()
            .find(|r| r.namespace == namespace && r.name == record.name)
            .ok_or_else(|| StoreError::NotFound {
                namespace: namespace.to_string(),
                name: record.name.clone(),
            })?;

        slot.data = record.data.clone();
        Ok(slot.clone())
    }
}

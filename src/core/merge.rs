//! Record merge engine.
//!
//! Applies key additions and removals to records in memory. Nothing here
//! writes to a store until [`Change::commit`] is called, so a failed merge
//! never leaves a partial write behind.

use tracing::debug;

use crate::core::domain::Record;
use crate::core::store::SecretStore;
use crate::core::types::SecretData;
use crate::error::{Error, Result};

/// Find a record by name in a namespace listing.
pub fn find<'a>(records: &'a [Record], name: &str) -> Option<&'a Record> {
    records.iter().find(|r| r.name == name)
}

/// Overwrite-merge `additions` into `existing`, or build a new record.
///
/// Keys absent from `additions` keep their current value.
pub fn apply_set(existing: Option<Record>, name: &str, additions: SecretData) -> Record {
    match existing {
        Some(record) => overwrite(record, additions),
        None => Record {
            name: name.to_string(),
            data: additions,
            ..Record::default()
        },
    }
}

/// Overwrite-merge dotenv-sourced `overrides` into an existing record.
pub fn apply_load(record: Record, overrides: SecretData) -> Record {
    overwrite(record, overrides)
}

fn overwrite(mut record: Record, additions: SecretData) -> Record {
    debug!(name = %record.name, keys = additions.len(), "merging keys");
    record.data.extend(additions);
    record
}

/// Remove `removals` from a record, in the given order.
///
/// # Errors
///
/// Returns `Error::KeyNotFound` for the first key that is not present.
pub fn apply_unset<S: AsRef<str>>(mut record: Record, removals: &[S]) -> Result<Record> {
    for key in removals {
        let key = key.as_ref();
        if record.data.remove(key).is_none() {
            return Err(Error::KeyNotFound {
                name: record.name,
                key: key.to_string(),
            });
        }
    }

    debug!(name = %record.name, removed = removals.len(), "removed keys");
    Ok(record)
}

/// A pending write against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// The record does not exist yet
    Create(Record),
    /// The record exists and is replaced
    Update(Record),
}

impl Change {
    /// Decide create-versus-update for `set` from a namespace listing.
    pub fn plan_set(records: &[Record], name: &str, additions: SecretData) -> Self {
        match find(records, name).cloned() {
            Some(existing) => Change::Update(apply_set(Some(existing), name, additions)),
            None => Change::Create(apply_set(None, name, additions)),
        }
    }

    /// The record that will be written.
    pub fn record(&self) -> &Record {
        match self {
            Change::Create(record) | Change::Update(record) => record,
        }
    }

    /// Persist the change with a single store call.
    ///
    /// # Errors
    ///
    /// Returns `Error::Store` naming the failed operation.
    pub fn commit(self, store: &dyn SecretStore, namespace: &str) -> Result<Record> {
        match self {
            Change::Create(record) => {
                debug!(%namespace, name = %record.name, "creating secret");
                store
                    .create(namespace, &record)
                    .map_err(|e| Error::store(format!("create secret {:?}", record.name), e))
            }
            Change::Update(record) => {
                debug!(%namespace, name = %record.name, "updating secret");
                store
                    .update(namespace, &record)
                    .map_err(|e| Error::store(format!("update secret {:?}", record.name), e))
            }
        }
    }
}

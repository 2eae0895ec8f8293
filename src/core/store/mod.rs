//! Secret storage.
//!
//! The [`SecretStore`] trait is the only way the core reaches a store, so
//! any backend can be injected: the Kubernetes API, a local TOML file, or
//! the in-memory store used by tests.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `etcd.rs`)
//! 3. Select it in `backend::open`
//!
//! Each command performs one read round-trip and at most one write. There
//! is no locking: a record modified by someone else between the read and
//! the write is overwritten.

use tracing::debug;

use crate::core::constants::DEFAULT_NAMESPACE;
use crate::core::domain::Record;
use crate::error::{Error, Result, StoreError};

mod backend;
mod file;
#[cfg(feature = "kube")]
mod cluster;
mod memory;

pub use backend::open;
pub use file::FileStore;
#[cfg(feature = "kube")]
pub use cluster::Kubernetes;
pub use memory::{Call, MemoryStore};

/// Capability interface over a secret store.
pub trait SecretStore {
    /// Namespace the store considers current, if it has one.
    fn default_namespace(&self) -> Option<String> {
        None
    }

    /// Fetch one record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has that name.
    fn get(&self, namespace: &str, name: &str) -> std::result::Result<Record, StoreError>;

    /// Fetch every record in a namespace, in store order.
    fn list(&self, namespace: &str) -> std::result::Result<Vec<Record>, StoreError>;

    /// Create a record that does not exist yet.
    fn create(&self, namespace: &str, record: &Record) -> std::result::Result<Record, StoreError>;

    /// Replace the data of an existing record.
    fn update(&self, namespace: &str, record: &Record) -> std::result::Result<Record, StoreError>;
}

/// Resolve the namespace for one invocation.
///
/// An explicit value wins, then the store's default, then `"default"`.
pub fn resolve_namespace(explicit: Option<&str>, store: &dyn SecretStore) -> String {
    let namespace = explicit
        .filter(|ns| !ns.is_empty())
        .map(str::to_string)
        .or_else(|| store.default_namespace().filter(|ns| !ns.is_empty()))
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

    debug!(%namespace, "resolved namespace");
    namespace
}

/// Fetch the named record, or every record in the namespace.
///
/// # Errors
///
/// Returns `Error::Store` naming the failed operation.
pub fn fetch(store: &dyn SecretStore, namespace: &str, name: Option<&str>) -> Result<Vec<Record>> {
    match name {
        Some(name) => {
            debug!(%namespace, %name, "getting secret");
            let record = store
                .get(namespace, name)
                .map_err(|e| Error::store(format!("get secret {:?}", name), e))?;
            Ok(vec![record])
        }
        None => {
            debug!(%namespace, "listing secrets");
            store
                .list(namespace)
                .map_err(|e| Error::store("list secrets", e))
        }
    }
}

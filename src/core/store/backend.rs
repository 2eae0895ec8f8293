//! Backend selection logic for secret storage
//!
//! `--store-file` selects the TOML file store. Otherwise the Kubernetes
//! store is used when the crate is built with the `kube` feature.

use tracing::info;

use super::{FileStore, SecretStore};
use crate::core::config::Options;
use crate::error::Result;

/// Open the store selected by `options`.
///
/// # Errors
///
/// Returns `ConfigError::NoBackend` when no backend is available, or
/// `Error::Store` if connecting to the cluster fails.
pub fn open(options: &Options) -> Result<Box<dyn SecretStore>> {
    if let Some(path) = &options.store_file {
        info!(path = %path.display(), "using file store");
        return Ok(Box::new(FileStore::new(path.clone())));
    }

    open_cluster(options)
}

#[cfg(feature = "kube")]
fn open_cluster(options: &Options) -> Result<Box<dyn SecretStore>> {
    info!("using Kubernetes store");
    let store = super::Kubernetes::connect(options.kubeconfig.as_deref(), options.context.as_deref())
        .map_err(|e| crate::error::Error::store("initialize Kubernetes API client", e))?;
    Ok(Box::new(store))
}

#[cfg(not(feature = "kube"))]
fn open_cluster(_options: &Options) -> Result<Box<dyn SecretStore>> {
    Err(crate::error::ConfigError::NoBackend.into())
}

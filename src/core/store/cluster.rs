//! Kubernetes API secret store.
//!
//! Talks to the cluster selected by a kubeconfig. Enabled with the `kube`
//! feature (on by default).
//!
//! The async client is driven from a private current-thread runtime, so the
//! rest of the crate stays synchronous.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::ByteString;
use kube::api::{ListParams, Patch, PatchParams, PostParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config};
use tokio::runtime::Runtime;
use tracing::{debug, trace};

use super::SecretStore;
use crate::core::domain::Record;
use crate::error::StoreError;

/// Store backed by the Secrets API of a Kubernetes cluster.
pub struct Kubernetes {
    runtime: Runtime,
    client: Client,
    default_namespace: String,
}

impl Kubernetes {
    /// Connect using `kubeconfig` (or the standard lookup) and `context`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Kubeconfig` if the kubeconfig cannot be loaded,
    /// or `StoreError::Kube` if the client cannot be built.
    pub fn connect(kubeconfig: Option<&Path>, context: Option<&str>) -> Result<Self, StoreError> {
        // rustls 0.23 needs a process-wide crypto provider; ignore the error
        // when one is already installed.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(StoreError::Runtime)?;

        let options = KubeConfigOptions {
            context: context.map(str::to_string),
            ..KubeConfigOptions::default()
        };

        let (client, default_namespace) = runtime.block_on(async {
            let config = match kubeconfig {
                Some(path) => {
                    debug!(path = %path.display(), "reading kubeconfig");
                    let kubeconfig = Kubeconfig::read_from(path)?;
                    Config::from_custom_kubeconfig(kubeconfig, &options).await?
                }
                None => Config::from_kubeconfig(&options).await?,
            };

            let default_namespace = config.default_namespace.clone();
            let client = Client::try_from(config)?;
            Ok::<_, StoreError>((client, default_namespace))
        })?;

        debug!(%default_namespace, "connected to cluster");

        Ok(Self {
            runtime,
            client,
            default_namespace,
        })
    }

    fn api(&self, namespace: &str) -> Api<Secret> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

fn not_found(err: kube::Error, namespace: &str, name: &str) -> StoreError {
    match err {
        kube::Error::Api(resp) if resp.code == 404 => StoreError::NotFound {
            namespace: namespace.to_string(),
            name: name.to_string(),
        },
        other => StoreError::Kube(other),
    }
}

fn to_record(secret: Secret, namespace: &str) -> Record {
    Record {
        name: secret.metadata.name.unwrap_or_default(),
        namespace: secret
            .metadata
            .namespace
            .unwrap_or_else(|| namespace.to_string()),
        kind: secret.type_.unwrap_or_default(),
        data: secret
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| (key, value.0))
            .collect(),
    }
}

fn to_secret(record: &Record, namespace: &str) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(record.name.clone()),
            namespace: Some(namespace.to_string()),
            ..ObjectMeta::default()
        },
        type_: (!record.kind.is_empty()).then(|| record.kind.clone()),
        data: Some(
            record
                .data
                .iter()
                .map(|(key, value)| (key.clone(), ByteString(value.clone())))
                .collect(),
        ),
        ..Secret::default()
    }
}

/// Strategic-merge patch that replaces `data` wholesale.
///
/// Labels, annotations and other metadata are left alone, and no
/// resourceVersion is sent.
fn replace_data_patch(record: &Record) -> serde_json::Value {
    let mut data = serde_json::Map::new();
    data.insert("$patch".to_string(), serde_json::Value::from("replace"));
    for (key, value) in &record.data {
        data.insert(key.clone(), serde_json::Value::from(STANDARD.encode(value)));
    }
    serde_json::json!({ "data": data })
}

impl SecretStore for Kubernetes {
    fn default_namespace(&self) -> Option<String> {
        Some(self.default_namespace.clone())
    }

    fn get(&self, namespace: &str, name: &str) -> Result<Record, StoreError> {
        trace!(%namespace, %name, "GET secret");
        let secret = self
            .runtime
            .block_on(self.api(namespace).get(name))
            .map_err(|e| not_found(e, namespace, name))?;
        Ok(to_record(secret, namespace))
    }

    fn list(&self, namespace: &str) -> Result<Vec<Record>, StoreError> {
        trace!(%namespace, "LIST secrets");
        let list = self
            .runtime
            .block_on(self.api(namespace).list(&ListParams::default()))?;
        Ok(list
            .items
            .into_iter()
            .map(|secret| to_record(secret, namespace))
            .collect())
    }

    fn create(&self, namespace: &str, record: &Record) -> Result<Record, StoreError> {
        trace!(%namespace, name = %record.name, "POST secret");
        let secret = to_secret(record, namespace);
        let created = self
            .runtime
            .block_on(self.api(namespace).create(&PostParams::default(), &secret))
            .map_err(|e| match e {
                kube::Error::Api(resp) if resp.code == 409 => StoreError::AlreadyExists {
                    namespace: namespace.to_string(),
                    name: record.name.clone(),
                },
                other => StoreError::Kube(other),
            })?;
        Ok(to_record(created, namespace))
    }

    fn update(&self, namespace: &str, record: &Record) -> Result<Record, StoreError> {
        trace!(%namespace, name = %record.name, "PATCH secret");
        let patch = Patch::Strategic(replace_data_patch(record));
        let updated = self
            .runtime
            .block_on(
                self.api(namespace)
                    .patch(&record.name, &PatchParams::default(), &patch),
            )
            .map_err(|e| not_found(e, namespace, &record.name))?;
        Ok(to_record(updated, namespace))
    }
}

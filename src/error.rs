//! Error types.
//!
//! Every failure aborts the running command; nothing is recovered locally.
//! Store failures carry an operation-identifying context so the shell can
//! print a single line such as `get secret "rails": secrets "rails" not found`.

use thiserror::Error;

/// Top-level error returned by every k8sec operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("{context}: {source}")]
    Store {
        context: String,
        #[source]
        source: StoreError,
    },

    #[error("the key {key:?} does not exist in secret {name:?}")]
    KeyNotFound { name: String, key: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Wrap a store failure with the operation that triggered it.
    pub fn store(context: impl Into<String>, source: StoreError) -> Self {
        Error::Store {
            context: context.into(),
            source,
        }
    }

    /// Wrap an I/O failure with the file or stream involved.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether the root cause is a missing record in the store.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Store {
                source: StoreError::NotFound { .. },
                ..
            }
        )
    }
}

/// Malformed dotenv text or command-line arguments.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("line must be key=value format: {line:?}")]
    MissingSeparator { line: String },

    #[error("argument should be in key=value format: {arg:?}")]
    InvalidArgument { arg: String },

    #[error("decode value of {key:?} as base64-encoded string: {source}")]
    InvalidBase64 {
        key: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("input is not valid UTF-8 text")]
    InvalidUtf8,
}

/// Failures reported by a secret store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("secrets {name:?} not found in namespace {namespace:?}")]
    NotFound { namespace: String, name: String },

    #[error("secrets {name:?} already exists in namespace {namespace:?}")]
    AlreadyExists { namespace: String, name: String },

    #[error("{0}")]
    Backend(String),

    #[error("store file is corrupt: {0}")]
    Corrupt(String),

    #[error("store file i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse store file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize store file: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[cfg(feature = "kube")]
    #[error("kubernetes api: {0}")]
    Kube(#[from] kube::Error),

    #[cfg(feature = "kube")]
    #[error("load kubeconfig: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),

    #[cfg(feature = "kube")]
    #[error("start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Invalid invocation or backend configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no secret store available: pass --store-file or build with the `kube` feature")]
    NoBackend,
}

pub type Result<T> = std::result::Result<T, Error>;

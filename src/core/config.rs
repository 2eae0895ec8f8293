//! Invocation options.
//!
//! Global flags are collected once per invocation into an [`Options`] value
//! and handed to every command explicitly.

use std::path::PathBuf;

/// Options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Namespace given with `--namespace`; wins over any store default
    pub namespace: Option<String>,
    /// Explicit kubeconfig path
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context override
    pub context: Option<String>,
    /// TOML store file; selects the file backend when set
    pub store_file: Option<PathBuf>,
    /// Print error details and raise log verbosity
    pub debug: bool,
}

impl Options {
    /// Options that target a TOML store file.
    pub fn with_store_file(path: impl Into<PathBuf>) -> Self {
        Self {
            store_file: Some(path.into()),
            ..Self::default()
        }
    }
}

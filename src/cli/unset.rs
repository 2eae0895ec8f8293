//! Unset command - remove keys from a secret.

use std::io::Write;

use tracing::info;

use crate::core::config::Options;
use crate::core::merge::{self, Change};
use crate::core::store::SecretStore;
use crate::error::{Error, Result};

/// Options of `k8sec unset`.
#[derive(Debug, Clone, Default)]
pub struct UnsetOptions {
    pub name: String,
    pub keys: Vec<String>,
}

/// Remove keys from the named record.
///
/// The record is written once, only after every key was found.
pub fn run(
    store: &dyn SecretStore,
    namespace: &str,
    opts: &UnsetOptions,
    out: &mut dyn Write,
) -> Result<()> {
    info!(name = %opts.name, keys = opts.keys.len(), "unsetting secrets");

    let record = store
        .get(namespace, &opts.name)
        .map_err(|e| Error::store(format!("get current secret {:?}", opts.name), e))?;

    let record = merge::apply_unset(record, &opts.keys)?;
    let record = Change::Update(record).commit(store, namespace)?;

    writeln!(out, "{record}").map_err(|e| Error::io("write output", e))
}

/// Execute `k8sec unset` against the configured store.
pub fn execute(options: &Options, opts: &UnsetOptions) -> Result<()> {
    let (store, namespace) = super::connect(options)?;
    run(store.as_ref(), &namespace, opts, &mut std::io::stdout().lock())
}

//! Set command - add or overwrite keys, creating the secret if needed.

use std::io::Write;

use tracing::info;

use crate::core::config::Options;
use crate::core::dotenv;
use crate::core::merge::Change;
use crate::core::store::SecretStore;
use crate::error::{Error, Result};

/// Options of `k8sec set`.
#[derive(Debug, Clone, Default)]
pub struct SetOptions {
    pub name: String,
    pub pairs: Vec<String>,
    pub base64: bool,
}

/// Merge `KEY=VALUE` pairs into the named record.
///
/// Existence is decided from the namespace listing, so setting keys on a
/// missing record creates it.
pub fn run(
    store: &dyn SecretStore,
    namespace: &str,
    opts: &SetOptions,
    out: &mut dyn Write,
) -> Result<()> {
    let additions = dotenv::parse_assignments(&opts.pairs, opts.base64)?;
    info!(name = %opts.name, keys = additions.len(), "setting secrets");

    let records = store
        .list(namespace)
        .map_err(|e| Error::store(format!("get current secret {:?}", opts.name), e))?;

    let record = Change::plan_set(&records, &opts.name, additions).commit(store, namespace)?;

    writeln!(out, "{record}").map_err(|e| Error::io("write output", e))
}

/// Execute `k8sec set` against the configured store.
pub fn execute(options: &Options, opts: &SetOptions) -> Result<()> {
    let (store, namespace) = super::connect(options)?;
    run(store.as_ref(), &namespace, opts, &mut std::io::stdout().lock())
}

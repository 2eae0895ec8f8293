//! Load command - merge dotenv text into an existing secret.

use std::io::{Read, Write};
use std::path::PathBuf;

use tracing::info;

use crate::core::config::Options;
use crate::core::dotenv;
use crate::core::merge::{self, Change};
use crate::core::store::SecretStore;
use crate::error::{Error, Result};

/// Options of `k8sec load`.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub name: String,
    pub filename: Option<PathBuf>,
}

/// Decode dotenv text and merge it into the named record.
///
/// Text comes from `opts.filename` when set, otherwise from `input`. The
/// record must already exist.
pub fn run(
    store: &dyn SecretStore,
    namespace: &str,
    opts: &LoadOptions,
    input: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<()> {
    let overrides = match &opts.filename {
        Some(path) => dotenv::read_file(path)?,
        None => {
            let mut bytes = Vec::new();
            input
                .read_to_end(&mut bytes)
                .map_err(|e| Error::io("read standard input", e))?;
            dotenv::decode_bytes(&bytes)?
        }
    };
    info!(name = %opts.name, keys = overrides.len(), "loading secrets");

    let record = store
        .get(namespace, &opts.name)
        .map_err(|e| Error::store(format!("get secret {:?}", opts.name), e))?;

    let record = Change::Update(merge::apply_load(record, overrides)).commit(store, namespace)?;

    writeln!(out, "{record}").map_err(|e| Error::io("write output", e))
}

/// Execute `k8sec load` against the configured store.
pub fn execute(options: &Options, opts: &LoadOptions) -> Result<()> {
    let (store, namespace) = super::connect(options)?;
    run(
        store.as_ref(),
        &namespace,
        opts,
        &mut std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
    )
}

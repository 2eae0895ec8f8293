//! Dump command - secrets as sorted dotenv text.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::core::config::Options;
use crate::core::dotenv;
use crate::core::store::{self, SecretStore};
use crate::error::{Error, Result};

/// Options of `k8sec dump`.
#[derive(Debug, Clone, Default)]
pub struct DumpOptions {
    pub name: Option<String>,
    pub filename: Option<PathBuf>,
    pub noquotes: bool,
}

/// Dump one record, or the whole namespace, as dotenv lines.
///
/// Lines go to `opts.filename` when set, otherwise to `out`.
pub fn run(
    store: &dyn SecretStore,
    namespace: &str,
    opts: &DumpOptions,
    out: &mut dyn Write,
) -> Result<()> {
    let records = store::fetch(store, namespace, opts.name.as_deref())?;
    let lines = dotenv::encode_all(records.iter().map(|r| &r.data), !opts.noquotes);

    match &opts.filename {
        Some(path) => {
            info!(path = %path.display(), lines = lines.len(), "writing dotenv file");
            dotenv::write_file(path, &lines)
        }
        None => out
            .write_all(dotenv::render(&lines).as_bytes())
            .map_err(|e| Error::io("write output", e)),
    }
}

/// Execute `k8sec dump` against the configured store.
pub fn execute(options: &Options, opts: &DumpOptions) -> Result<()> {
    let (store, namespace) = super::connect(options)?;
    run(store.as_ref(), &namespace, opts, &mut std::io::stdout().lock())
}

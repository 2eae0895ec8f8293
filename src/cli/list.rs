//! List command - secrets as a tab-aligned table.

use std::io::Write;

use crate::core::config::Options;
use crate::core::store::{self, SecretStore};
use crate::core::table::{self, ValueEncoding};
use crate::error::{Error, Result};

/// Options of `k8sec list`.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub name: Option<String>,
    pub base64: bool,
}

/// Print one record, or the whole namespace, as `NAME TYPE KEY VALUE` rows.
pub fn run(
    store: &dyn SecretStore,
    namespace: &str,
    opts: &ListOptions,
    out: &mut dyn Write,
) -> Result<()> {
    let records = store::fetch(store, namespace, opts.name.as_deref())?;
    let rows = table::flatten(&records, ValueEncoding::from_flag(opts.base64));
    table::render(&rows, out).map_err(|e| Error::io("write output", e))
}

/// Execute `k8sec list` against the configured store.
pub fn execute(options: &Options, opts: &ListOptions) -> Result<()> {
    let (store, namespace) = super::connect(options)?;
    run(store.as_ref(), &namespace, opts, &mut std::io::stdout().lock())
}

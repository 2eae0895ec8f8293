//! Version command.

use crate::error::Result;

/// Build revision, injected at compile time through `K8SEC_REVISION`.
pub fn revision() -> &'static str {
    option_env!("K8SEC_REVISION").unwrap_or("unknown")
}

/// `k8sec version X, build Y`.
pub fn version_string() -> String {
    format!(
        "k8sec version {}, build {}",
        env!("CARGO_PKG_VERSION"),
        revision()
    )
}

/// Print the version line.
pub fn execute() -> Result<()> {
    println!("{}", version_string());
    Ok(())
}

//! Constants used throughout k8sec.
//!
//! Centralizes magic strings and configuration values.

/// Namespace used when neither the caller nor the store names one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Kind assigned to records created without an explicit one.
pub const DEFAULT_KIND: &str = "Opaque";

/// Header row of `k8sec list`.
pub const TABLE_HEADER: [&str; 4] = ["NAME", "TYPE", "KEY", "VALUE"];

/// Tab stop width used when aligning table columns.
pub const TAB_WIDTH: usize = 8;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "K8SEC_LOG";

/// Environment variable pointing at a TOML store file.
pub const STORE_FILE_ENV: &str = "K8SEC_STORE_FILE";

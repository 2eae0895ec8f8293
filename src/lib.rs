//! k8sec - manage Kubernetes Secrets from the command line.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── dump          # Records as sorted dotenv text
//! │   ├── list          # Records as a tab-aligned table
//! │   ├── load          # Merge dotenv text into a record
//! │   ├── set / unset   # Add or remove keys
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── dotenv        # KEY=VALUE codec
//!     ├── quote         # Double-quoted literals over raw bytes
//!     ├── merge         # Non-destructive record merges
//!     ├── table         # Row projection and rendering
//!     └── store/        # Secret storage backends
//!         ├── mod       # SecretStore trait
//!         ├── cluster   # Kubernetes API (feature `kube`)
//!         ├── file      # Local TOML file
//!         └── memory    # In-memory store for tests
//! ```
//!
//! Every command is one read, an in-memory merge, and at most one write.

pub mod cli;
pub mod core;
pub mod error;

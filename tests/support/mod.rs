//! Test support utilities for k8sec integration tests.
//!
//! Every test drives the binary against its own TOML store file, so no
//! cluster is needed and tests can run in parallel.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated store file.
pub struct Test {
    /// Temporary working directory; also holds the store file
    pub dir: TempDir,
}

impl Test {
    /// Create an environment whose store file does not exist yet.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create an environment seeded with the given store contents.
    pub fn with_store(contents: &str) -> Self {
        let t = Self::new();
        std::fs::write(t.store_path(), contents).expect("failed to write store file");
        t
    }

    /// Create an environment holding the `rails` and service-account secrets.
    pub fn seeded() -> Self {
        Self::with_store(SEEDED_STORE)
    }

    /// Path of the TOML store file.
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("secrets.toml")
    }

    /// Path of a file inside the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Raw contents of the store file.
    pub fn store_contents(&self) -> String {
        std::fs::read_to_string(self.store_path()).unwrap_or_default()
    }
}

//! TOML file-backed secret store.
//!
//! Keeps every namespace in one file. Values are stored base64-encoded, the
//! same way the Kubernetes API carries them:
//!
//! ```toml
//! namespace = "staging"
//!
//! [[secrets]]
//! namespace = "staging"
//! name = "rails"
//! type = "Opaque"
//!
//! [secrets.data]
//! database-url = "cG9zdGdyZXM6Ly9leGFtcGxlLmNvbTo1NDMyL2RibmFtZQ=="
//! ```
//!
//! The file is read on every call and written back on every mutation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::SecretStore;
use crate::core::constants::DEFAULT_KIND;
use crate::core::domain::Record;
use crate::error::StoreError;

/// Store persisted in a single TOML file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    #[serde(default)]
    secrets: Vec<StoredSecret>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSecret {
    namespace: String,
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    data: BTreeMap<String, String>,
}

impl StoredSecret {
    fn from_record(namespace: &str, record: &Record) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: record.name.clone(),
            kind: record.kind.clone(),
            data: record
                .data
                .iter()
                .map(|(k, v)| (k.clone(), STANDARD.encode(v)))
                .collect(),
        }
    }

    fn to_record(&self) -> Result<Record, StoreError> {
        let mut record = Record::new(&self.name)
            .in_namespace(&self.namespace)
            .with_kind(&self.kind);

        for (key, encoded) in &self.data {
            let value = STANDARD.decode(encoded).map_err(|e| {
                StoreError::Corrupt(format!("{}/{} key {:?}: {}", self.namespace, self.name, key, e))
            })?;
            record.data.insert(key.clone(), value);
        }

        Ok(record)
    }

    fn is(&self, namespace: &str, name: &str) -> bool {
        self.namespace == namespace && self.name == name
    }
}

impl FileStore {
    /// Open a store at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StoreFile, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file missing, treating as empty");
            return Ok(StoreFile::default());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&contents)?)
    }

    fn save(&self, file: &StoreFile) -> Result<(), StoreError> {
        debug!(path = %self.path.display(), secrets = file.secrets.len(), "saving store file");
        let contents = toml::to_string_pretty(file)?;

        #[cfg(unix)]
        {
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut out = std::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .mode(0o600)
                .open(&self.path)?;
            out.write_all(contents.as_bytes())?;
            out.flush()?;

            // mode() only applies to new files
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        #[cfg(not(unix))]
        std::fs::write(&self.path, contents)?;

        Ok(())
    }
}

impl SecretStore for FileStore {
    fn default_namespace(&self) -> Option<String> {
        self.load().ok().and_then(|file| file.namespace)
    }

    fn get(&self, namespace: &str, name: &str) -> Result<Record, StoreError> {
        let file = self.load()?;
        file.secrets
            .iter()
            .find(|s| s.is(namespace, name))
            .ok_or_else(|| StoreError::NotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })?
            .to_record()
    }

    fn list(&self, namespace: &str) -> Result<Vec<Record>, StoreError> {
        let file = self.load()?;
        file.secrets
            .iter()
            .filter(|s| s.namespace == namespace)
            .map(StoredSecret::to_record)
            .collect()
    }

    fn create(&self, namespace: &str, record: &Record) -> Result<Record, StoreError> {
        let mut file = self.load()?;
        if file.secrets.iter().any(|s| s.is(namespace, &record.name)) {
            return Err(StoreError::AlreadyExists {
                namespace: namespace.to_string(),
                name: record.name.clone(),
            });
        }

        let mut stored = StoredSecret::from_record(namespace, record);
        if stored.kind.is_empty() {
            stored.kind = DEFAULT_KIND.to_string();
        }
        let created = stored.to_record()?;

        file.secrets.push(stored);
        self.save(&file)?;
        Ok(created)
    }

    fn update(&self, namespace: &str, record: &Record) -> Result<Record, StoreError> {
        let mut file = self.load()?;
        let slot = file
            .secrets
            .iter_mut()
            .find(|s| s.is(namespace, &record.name))
            .ok_or_else(|| StoreError::NotFound {
                namespace: namespace.to_string(),
                name: record.name.clone(),
            })?;

        slot.data = StoredSecret::from_record(namespace, record).data;
        let updated = slot.to_record()?;

        self.save(&file)?;
        Ok(updated)
    }
}

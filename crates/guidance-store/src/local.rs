//! Local JSON snapshot
//!
//! The whole store lives in one file. Every save re-reads the file, applies
//! the change and replaces it through a temp file and a rename, so a crash
//! never leaves a half-written snapshot behind.

use crate::adapter::PersistenceAdapter;
use crate::error::PersistenceError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use guidance_catalog::{IdentityKey, Registry, ResultSet, StudentIdentity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// File name of the snapshot inside a data directory
pub const SNAPSHOT_FILE: &str = "guidance.json";

/// Persisted document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Class registry
    #[serde(default)]
    pub registry: Registry,
    /// Results per identity key
    #[serde(default)]
    pub results: BTreeMap<IdentityKey, ResultSet>,
    /// Last identified user
    #[serde(default)]
    pub last_user: Option<StudentIdentity>,
    /// Time of the last write
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

/// Snapshot-file adapter
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    // Serializes read-modify-write cycles.
    lock: Mutex<()>,
}

impl LocalStore {
    /// Store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store backed by [`SNAPSHOT_FILE`] inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(SNAPSHOT_FILE))
    }

    /// Snapshot file path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot; a missing file is an empty snapshot
    ///
    /// # Errors
    /// - `PersistenceError::Io` when the file exists but cannot be read
    /// - `PersistenceError::Serialization` when it is not a valid snapshot
    pub async fn read(&self) -> Result<Snapshot, PersistenceError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no snapshot yet");
                Ok(Snapshot::default())
            }
            Err(e) => Err(PersistenceError::io(&self.path, e)),
        }
    }

    async fn write(&self, mut snapshot: Snapshot) -> Result<(), PersistenceError> {
        snapshot.saved_at = Some(Utc::now());
        let bytes = serde_json::to_vec_pretty(&snapshot)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PersistenceError::io(parent, e))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| PersistenceError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| PersistenceError::io(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "snapshot written");
        Ok(())
    }

    async fn update<F>(&self, apply: F) -> Result<(), PersistenceError>
    where
        F: FnOnce(&mut Snapshot) + Send,
    {
        let _guard = self.lock.lock().await;
        let mut snapshot = self.read().await?;
        apply(&mut snapshot);
        self.write(snapshot).await
    }
}

#[async_trait]
impl PersistenceAdapter for LocalStore {
    async fn load_registry(&self) -> Result<Registry, PersistenceError> {
        Ok(self.read().await?.registry)
    }

    async fn save_registry(&self, registry: &Registry) -> Result<(), PersistenceError> {
        self.update(|s| s.registry = registry.clone()).await
    }

    async fn load_results(&self, key: &IdentityKey) -> Result<Option<ResultSet>, PersistenceError> {
        Ok(self.read().await?.results.remove(key))
    }

    async fn save_results(
        &self,
        key: &IdentityKey,
        results: &ResultSet,
    ) -> Result<(), PersistenceError> {
        self.update(|s| {
            let mut merged = results.clone();
            if let Some(previous) = s.results.get(key) {
                merged.merge_missing(previous);
            }
            s.results.insert(key.clone(), merged);
        })
        .await
    }

    async fn last_user(&self) -> Result<Option<StudentIdentity>, PersistenceError> {
        Ok(self.read().await?.last_user)
    }

    async fn remember_user(&self, user: &StudentIdentity) -> Result<(), PersistenceError> {
        self.update(|s| s.last_user = Some(user.clone())).await
    }

    async fn forget_user(&self) -> Result<(), PersistenceError> {
        self.update(|s| s.last_user = None).await
    }
}

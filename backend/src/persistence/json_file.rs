//! JSON file snapshot backend
//!
//! Stores the full client collection as a single JSON array in one file,
//! the same shape earlier builds kept under one browser storage slot.

use crate::persistence::SnapshotStore;
use anyhow::Context;
use async_trait::async_trait;
use clinic_manager_shared::Client;
use std::path::{Path, PathBuf};

/// Snapshot store backed by a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load_all(&self) -> anyhow::Result<Vec<Client>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("reading snapshot {}", self.path.display()))?;
        let clients = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing snapshot {}", self.path.display()))?;
        Ok(clients)
    }

    async fn save_all(&self, clients: &[Client]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("creating snapshot dir {}", parent.display()))?;
            }
        }
        let bytes = serde_json::to_vec(clients).context("serializing snapshot")?;
        tokio::fs::write(&self.path, bytes)
            .await
            .with_context(|| format!("writing snapshot {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("clients.json"));
        let clients = store.load_all().await.unwrap();
        assert!(clients.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clients.json");
        std::fs::write(&path, b"not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(store.load_all().await.is_err());
    }

    #[tokio::test]
    async fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/clients.json");
        let store = JsonFileStore::new(&path);
        store.save_all(&[]).await.unwrap();
        assert!(path.exists());
    }
}

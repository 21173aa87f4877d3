//! In-memory snapshot backend
//!
//! Test double for [`SnapshotStore`]: counts saves and can be armed to fail
//! the next save, for exercising the persistence-failure policy.

use crate::persistence::SnapshotStore;
use async_trait::async_trait;
use clinic_manager_shared::Client;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Snapshot store holding the blob in process memory.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Vec<Client>>,
    saves: AtomicUsize,
    fail_next_save: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the snapshot, as if a previous session had written it.
    pub fn seeded(clients: Vec<Client>) -> Self {
        Self {
            slot: Mutex::new(clients),
            ..Self::default()
        }
    }

    /// Number of `save_all` calls that reached the backend.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make the next `save_all` fail.
    pub fn fail_next_save(&self) {
        self.fail_next_save.store(true, Ordering::SeqCst);
    }

    /// Current persisted snapshot contents.
    pub fn persisted(&self) -> Vec<Client> {
        self.slot.lock().unwrap().clone()
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load_all(&self) -> anyhow::Result<Vec<Client>> {
        Ok(self.slot.lock().unwrap().clone())
    }

    async fn save_all(&self, clients: &[Client]) -> anyhow::Result<()> {
        if self.fail_next_save.swap(false, Ordering::SeqCst) {
            anyhow::bail!("simulated persistence failure");
        }
        *self.slot.lock().unwrap() = clients.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = MemoryStore::new();
        store.save_all(&[]).await.unwrap();
        assert_eq!(store.load_all().await.unwrap(), Vec::<Client>::new());
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test]
    async fn test_armed_failure_fires_once() {
        let store = MemoryStore::new();
        store.fail_next_save();
        assert!(store.save_all(&[]).await.is_err());
        assert!(store.save_all(&[]).await.is_ok());
        assert_eq!(store.save_count(), 1);
    }
}

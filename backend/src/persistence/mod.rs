//! Persistence collaborator
//!
//! The store persists the full client collection as one snapshot: any
//! key-value or document backend satisfying [`SnapshotStore`] can hold it.
//! `load_all` is called once at startup; `save_all` after every mutation.

use async_trait::async_trait;
use clinic_manager_shared::Client;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Whole-snapshot persistence contract.
///
/// Implementations replace the snapshot wholesale; there is no incremental
/// diffing, which bounds write cost by total data size.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Load the full client collection. A missing snapshot yields an empty
    /// collection, not an error.
    async fn load_all(&self) -> anyhow::Result<Vec<Client>>;

    /// Overwrite the persisted snapshot with the given collection.
    async fn save_all(&self, clients: &[Client]) -> anyhow::Result<()>;
}

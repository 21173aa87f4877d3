//! Client store
//!
//! Owns the canonical client collection and is the sole writer of the
//! persisted snapshot. Constructed once at process start and passed by
//! handle to every consumer; mutations take `&mut self`, so no two
//! mutating operations can interleave mid-execution.

use crate::error::{StoreError, StoreResult};
use crate::persistence::SnapshotStore;
use chrono::{NaiveDate, Utc};
use clinic_manager_shared::validation;
use clinic_manager_shared::{Client, DietEntry, MedicationEntry, TrainingEntry, WeightEntry};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Input for creating a client. Record collections start empty.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub profile_photo: Option<String>,
}

/// Explicit merge payload for [`ClientStore::update`].
///
/// Only the fields enumerated here are updatable; `None` leaves the field
/// untouched. A supplied record collection replaces the client's collection
/// wholesale, it is never merged entry-by-entry.
#[derive(Debug, Clone, Default)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub profile_photo: Option<String>,
    pub weights: Option<Vec<WeightEntry>>,
    pub medications: Option<Vec<MedicationEntry>>,
    pub diets: Option<Vec<DietEntry>>,
    pub trainings: Option<Vec<TrainingEntry>>,
}

impl ClientUpdate {
    fn validate(&self) -> StoreResult<()> {
        if let Some(name) = &self.name {
            validation::validate_client_name(name).map_err(StoreError::Validation)?;
        }
        if let Some(email) = &self.email {
            validation::validate_email(email).map_err(StoreError::Validation)?;
        }
        if let Some(birth_date) = self.birth_date {
            validation::validate_birth_date(birth_date, Utc::now().date_naive())
                .map_err(StoreError::Validation)?;
        }
        Ok(())
    }

    fn apply(self, client: &mut Client) {
        if let Some(name) = self.name {
            client.name = name;
        }
        if let Some(email) = self.email {
            client.email = email;
        }
        if let Some(phone) = self.phone {
            client.phone = phone;
        }
        if let Some(birth_date) = self.birth_date {
            client.birth_date = birth_date;
        }
        if let Some(profile_photo) = self.profile_photo {
            client.profile_photo = Some(profile_photo);
        }
        if let Some(weights) = self.weights {
            client.weights = weights;
        }
        if let Some(medications) = self.medications {
            client.medications = medications;
        }
        if let Some(diets) = self.diets {
            client.diets = diets;
        }
        if let Some(trainings) = self.trainings {
            client.trainings = trainings;
        }
    }
}

/// The canonical in-memory client collection.
///
/// Every mutation rewrites the entire persisted snapshot through the
/// injected [`SnapshotStore`]. A save failure propagates to the caller and
/// is not rolled back: the in-memory collection may then be ahead of the
/// persisted one.
pub struct ClientStore {
    clients: Vec<Client>,
    snapshot: Arc<dyn SnapshotStore>,
}

impl ClientStore {
    /// Open the store, loading the persisted snapshot once.
    pub async fn open(snapshot: Arc<dyn SnapshotStore>) -> StoreResult<Self> {
        let clients = snapshot.load_all().await?;
        debug!(count = clients.len(), "loaded client snapshot");
        Ok(Self { clients, snapshot })
    }

    /// All clients in insertion order.
    pub fn list(&self) -> &[Client] {
        &self.clients
    }

    /// Lookup by id. Absent is a valid, non-error result.
    pub fn get(&self, id: Uuid) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Create a client with a fresh id, a creation timestamp, and empty
    /// record collections, then persist the full collection.
    pub async fn create(&mut self, new: NewClient) -> StoreResult<Client> {
        validation::validate_client_name(&new.name).map_err(StoreError::Validation)?;
        validation::validate_email(&new.email).map_err(StoreError::Validation)?;
        validation::validate_birth_date(new.birth_date, Utc::now().date_naive())
            .map_err(StoreError::Validation)?;

        let client = Client {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            birth_date: new.birth_date,
            profile_photo: new.profile_photo,
            created_at: Utc::now(),
            weights: Vec::new(),
            medications: Vec::new(),
            diets: Vec::new(),
            trainings: Vec::new(),
        };
        self.clients.push(client.clone());
        self.persist().await?;
        Ok(client)
    }

    /// Shallow-merge `update` into the client with the given id, then
    /// persist. A missing id is a silent no-op.
    pub async fn update(&mut self, id: Uuid, update: ClientUpdate) -> StoreResult<()> {
        update.validate()?;
        match self.clients.iter_mut().find(|c| c.id == id) {
            Some(client) => update.apply(client),
            None => debug!(%id, "update for unknown client ignored"),
        }
        self.persist().await
    }

    /// Remove the client with the given id, destroying its records with it,
    /// then persist. A missing id is a silent no-op.
    pub async fn delete(&mut self, id: Uuid) -> StoreResult<()> {
        let before = self.clients.len();
        self.clients.retain(|c| c.id != id);
        if self.clients.len() == before {
            debug!(%id, "delete for unknown client ignored");
        }
        self.persist().await
    }

    async fn persist(&self) -> StoreResult<()> {
        self.snapshot.save_all(&self.clients).await?;
        Ok(())
    }
}

//! Record-collection mutators
//!
//! Pure per-category transitions: each `add_*` returns a replacement
//! collection containing the new, freshly-id'd entry, and each `remove_*`
//! returns the collection with the matching entry excluded. The client is
//! never mutated in place; callers pass the returned collection to
//! [`crate::store::ClientStore::update`] as the sole authoritative
//! replacement.

use crate::error::{StoreError, StoreResult};
use chrono::NaiveDate;
use clinic_manager_shared::validation;
use clinic_manager_shared::{Client, DietEntry, MedicationEntry, TrainingEntry, WeightEntry};
use uuid::Uuid;

/// Weight entry payload, missing its id.
#[derive(Debug, Clone)]
pub struct NewWeightEntry {
    pub date: NaiveDate,
    pub weight: f64,
    pub notes: Option<String>,
}

/// Medication entry payload, missing its id.
#[derive(Debug, Clone)]
pub struct NewMedicationEntry {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Diet entry payload, missing its id.
#[derive(Debug, Clone)]
pub struct NewDietEntry {
    pub date: NaiveDate,
    pub meal: String,
    pub description: String,
    pub calories: Option<u32>,
    pub notes: Option<String>,
}

/// Training entry payload, missing its id.
#[derive(Debug, Clone)]
pub struct NewTrainingEntry {
    pub date: NaiveDate,
    pub kind: String,
    pub duration: u32,
    pub exercises: String,
    pub notes: Option<String>,
}

pub fn add_weight_entry(client: &Client, new: NewWeightEntry) -> StoreResult<Vec<WeightEntry>> {
    validation::validate_weight(new.weight).map_err(StoreError::Validation)?;
    let mut weights = client.weights.clone();
    weights.push(WeightEntry {
        id: Uuid::new_v4(),
        date: new.date,
        weight: new.weight,
        notes: new.notes,
    });
    Ok(weights)
}

pub fn remove_weight_entry(client: &Client, entry_id: Uuid) -> Vec<WeightEntry> {
    client
        .weights
        .iter()
        .filter(|e| e.id != entry_id)
        .cloned()
        .collect()
}

pub fn add_medication_entry(
    client: &Client,
    new: NewMedicationEntry,
) -> StoreResult<Vec<MedicationEntry>> {
    validation::validate_medication_period(new.start_date, new.end_date)
        .map_err(StoreError::Validation)?;
    let mut medications = client.medications.clone();
    medications.push(MedicationEntry {
        id: Uuid::new_v4(),
        name: new.name,
        dosage: new.dosage,
        frequency: new.frequency,
        start_date: new.start_date,
        end_date: new.end_date,
        notes: new.notes,
    });
    Ok(medications)
}

pub fn remove_medication_entry(client: &Client, entry_id: Uuid) -> Vec<MedicationEntry> {
    client
        .medications
        .iter()
        .filter(|e| e.id != entry_id)
        .cloned()
        .collect()
}

pub fn add_diet_entry(client: &Client, new: NewDietEntry) -> StoreResult<Vec<DietEntry>> {
    if let Some(calories) = new.calories {
        validation::validate_calories(calories).map_err(StoreError::Validation)?;
    }
    let mut diets = client.diets.clone();
    diets.push(DietEntry {
        id: Uuid::new_v4(),
        date: new.date,
        meal: new.meal,
        description: new.description,
        calories: new.calories,
        notes: new.notes,
    });
    Ok(diets)
}

pub fn remove_diet_entry(client: &Client, entry_id: Uuid) -> Vec<DietEntry> {
    client
        .diets
        .iter()
        .filter(|e| e.id != entry_id)
        .cloned()
        .collect()
}

pub fn add_training_entry(
    client: &Client,
    new: NewTrainingEntry,
) -> StoreResult<Vec<TrainingEntry>> {
    validation::validate_duration_minutes(new.duration).map_err(StoreError::Validation)?;
    let mut trainings = client.trainings.clone();
    trainings.push(TrainingEntry {
        id: Uuid::new_v4(),
        date: new.date,
        kind: new.kind,
        duration: new.duration,
        exercises: new.exercises,
        notes: new.notes,
    });
    Ok(trainings)
}

pub fn remove_training_entry(client: &Client, entry_id: Uuid) -> Vec<TrainingEntry> {
    client
        .trainings
        .iter()
        .filter(|e| e.id != entry_id)
        .cloned()
        .collect()
}

//! Data models for the Clinic Manager application
//!
//! Field names serialize in camelCase so the persisted snapshot stays
//! byte-compatible with the JSON written by earlier builds of the client
//! application.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single weight measurement, in kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Weight in kilograms.
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A prescribed or ongoing medication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationEntry {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A logged meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Meal label, e.g. "breakfast" or "lunch".
    pub meal: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Session type label, e.g. "strength" or "cardio".
    #[serde(rename = "type")]
    pub kind: String,
    /// Duration in minutes.
    pub duration: u32,
    pub exercises: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A clinic client and their nested record collections.
///
/// Record collections are insertion-ordered; entry ids are unique within
/// their collection and are never shared across clients. `created_at` is
/// set once at creation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    /// Data URI or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub weights: Vec<WeightEntry>,
    pub medications: Vec<MedicationEntry>,
    pub diets: Vec<DietEntry>,
    pub trainings: Vec<TrainingEntry>,
}

/// The four named record collections of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordCategory {
    Weight,
    Medication,
    Diet,
    Training,
}

impl RecordCategory {
    pub const ALL: [RecordCategory; 4] = [
        RecordCategory::Weight,
        RecordCategory::Medication,
        RecordCategory::Diet,
        RecordCategory::Training,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordCategory::Weight => "weight",
            RecordCategory::Medication => "medication",
            RecordCategory::Diet => "diet",
            RecordCategory::Training => "training",
        }
    }

    /// Number of entries a client holds in this category.
    pub fn count_for(&self, client: &Client) -> usize {
        match self {
            RecordCategory::Weight => client.weights.len(),
            RecordCategory::Medication => client.medications.len(),
            RecordCategory::Diet => client.diets.len(),
            RecordCategory::Training => client.trainings.len(),
        }
    }
}

impl std::fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort key for chronological ordering of record entries.
///
/// Medications order by their start date; all other categories carry a
/// single entry date.
pub trait Dated {
    fn entry_date(&self) -> NaiveDate;
}

impl Dated for WeightEntry {
    fn entry_date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for MedicationEntry {
    fn entry_date(&self) -> NaiveDate {
        self.start_date
    }
}

impl Dated for DietEntry {
    fn entry_date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for TrainingEntry {
    fn entry_date(&self) -> NaiveDate {
        self.date
    }
}

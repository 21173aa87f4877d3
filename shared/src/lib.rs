//! Clinic Manager Shared Library
//!
//! This crate contains the client-record data model, derived-statistics
//! types, and validation utilities shared between the backend core and
//! any presentation layer.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::{
    Client, Dated, DietEntry, MedicationEntry, RecordCategory, TrainingEntry, WeightEntry,
};
pub use types::*;

//! Clinic Manager Backend Library
//!
//! The client-record core: the canonical client store, record-collection
//! mutators, the aggregation engine, and search/sort helpers, together with
//! the persistence and identity collaborator seams.
//!
//! ## Architecture
//!
//! - Store: owns the in-memory client collection and the persisted snapshot
//! - Records: pure add/remove transitions over a client's nested collections
//! - Stats / Search: pure read-side functions over the current snapshot
//! - Persistence / Identity: swappable external collaborators

pub mod config;
pub mod error;
pub mod identity;
pub mod persistence;
pub mod records;
pub mod search;
pub mod stats;
pub mod store;

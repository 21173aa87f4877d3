//! Derived-statistics types consumed by presentation code
//!
//! These are the chart-ready and summary-card shapes the aggregation
//! engine produces from the current client snapshot.

use crate::models::RecordCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a client's weight change between their first and most
/// recent measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Loss,
    Gain,
}

/// Per-client weight trend. Undefined (absent) with fewer than two entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTrend {
    pub direction: TrendDirection,
    /// Signed change in kg, most recent minus earliest.
    pub delta: f64,
    /// `abs(delta)` rounded to one decimal place for display.
    pub magnitude: f64,
}

/// Fleet-wide summary counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetStats {
    pub total_clients: usize,
    pub total_weight_entries: usize,
    pub total_medications: usize,
    pub total_diets: usize,
    pub total_trainings: usize,
    /// Average of each qualifying client's most recent weight; 0.0 when no
    /// client has a weight entry.
    pub average_latest_weight: f64,
}

/// Per-client record counts for the comparative bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecordCounts {
    /// Client's first name, as charted.
    pub client: String,
    pub weights: usize,
    pub trainings: usize,
    pub diets: usize,
}

/// One point of the fleet-wide weight time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightPoint {
    pub date: NaiveDate,
    pub weight: f64,
    /// First name of the client the measurement belongs to.
    pub client: String,
}

/// Total entry count for one record category (pie chart feed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: RecordCategory,
    pub count: usize,
}

//! Aggregation and statistics engine
//!
//! Pure read-side derivations over the current client snapshot: per-client
//! weight trends and the fleet-wide numbers behind the dashboard charts.
//! All date sorts are stable, so results are deterministic given identical
//! input order.

use crate::search::{sorted_by_date_ascending, sorted_by_date_descending};
use clinic_manager_shared::{
    CategoryCount, Client, ClientRecordCounts, FleetStats, RecordCategory, TrendDirection,
    WeightPoint, WeightTrend,
};

/// Clients charted in the per-client record-count comparison.
const CHARTED_CLIENTS: usize = 8;

/// Points kept in the fleet-wide weight time series.
const SERIES_POINTS: usize = 10;

/// Weight change between a client's earliest and most recent measurement.
///
/// Undefined with fewer than two entries. The magnitude is rounded to one
/// decimal place for display; the delta keeps full precision.
pub fn weight_trend(client: &Client) -> Option<WeightTrend> {
    if client.weights.len() < 2 {
        return None;
    }
    let sorted = sorted_by_date_ascending(&client.weights);
    let first = sorted.first().map(|e| e.weight)?;
    let last = sorted.last().map(|e| e.weight)?;
    let delta = last - first;
    Some(WeightTrend {
        direction: if delta < 0.0 {
            TrendDirection::Loss
        } else {
            TrendDirection::Gain
        },
        delta,
        magnitude: (delta.abs() * 10.0).round() / 10.0,
    })
}

/// Fleet-wide summary counts and the average latest weight.
///
/// Clients without a weight entry are excluded from both the numerator and
/// the denominator of the average; the average is 0.0 when none qualify.
pub fn fleet_stats(clients: &[Client]) -> FleetStats {
    let latest_weights: Vec<f64> = clients
        .iter()
        .filter(|c| !c.weights.is_empty())
        .filter_map(|c| {
            sorted_by_date_descending(&c.weights)
                .first()
                .map(|e| e.weight)
        })
        .collect();
    let average_latest_weight = if latest_weights.is_empty() {
        0.0
    } else {
        latest_weights.iter().sum::<f64>() / latest_weights.len() as f64
    };

    FleetStats {
        total_clients: clients.len(),
        total_weight_entries: clients.iter().map(|c| c.weights.len()).sum(),
        total_medications: clients.iter().map(|c| c.medications.len()).sum(),
        total_diets: clients.iter().map(|c| c.diets.len()).sum(),
        total_trainings: clients.iter().map(|c| c.trainings.len()).sum(),
        average_latest_weight,
    }
}

/// Weight/training/diet counts per client, labeled by first name, limited
/// to the first 8 clients in store order.
pub fn record_counts_per_client(clients: &[Client]) -> Vec<ClientRecordCounts> {
    clients
        .iter()
        .take(CHARTED_CLIENTS)
        .map(|c| ClientRecordCounts {
            client: first_name(&c.name),
            weights: c.weights.len(),
            trainings: c.trainings.len(),
            diets: c.diets.len(),
        })
        .collect()
}

/// All weight entries across the fleet flattened into dated points, sorted
/// ascending by date, keeping the most recent 10.
pub fn recent_weight_series(clients: &[Client]) -> Vec<WeightPoint> {
    let mut points: Vec<WeightPoint> = clients
        .iter()
        .flat_map(|c| {
            c.weights.iter().map(|w| WeightPoint {
                date: w.date,
                weight: w.weight,
                client: first_name(&c.name),
            })
        })
        .collect();
    points.sort_by_key(|p| p.date);
    if points.len() > SERIES_POINTS {
        points.drain(..points.len() - SERIES_POINTS);
    }
    points
}

/// Total entry count per record category, in fixed category order.
pub fn category_totals(clients: &[Client]) -> Vec<CategoryCount> {
    RecordCategory::ALL
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: clients.iter().map(|c| category.count_for(c)).sum(),
        })
        .collect()
}

fn first_name(name: &str) -> String {
    name.split_whitespace().next().unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use clinic_manager_shared::{DietEntry, WeightEntry};
    use proptest::prelude::*;
    use uuid::Uuid;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn weight(day: u32, kg: f64) -> WeightEntry {
        WeightEntry {
            id: Uuid::new_v4(),
            date: date(day),
            weight: kg,
            notes: None,
        }
    }

    fn client(name: &str, weights: Vec<WeightEntry>) -> Client {
        Client {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: String::new(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            profile_photo: None,
            created_at: Utc::now(),
            weights,
            medications: Vec::new(),
            diets: Vec::new(),
            trainings: Vec::new(),
        }
    }

    #[test]
    fn test_trend_undefined_below_two_entries() {
        assert_eq!(weight_trend(&client("Ana", vec![])), None);
        assert_eq!(weight_trend(&client("Ana", vec![weight(1, 80.0)])), None);
    }

    #[test]
    fn test_trend_loss_with_rounded_magnitude() {
        // Entries given newest-first to prove sorting is by date, not input order
        let c = client("Ana", vec![weight(20, 75.0), weight(10, 80.0)]);
        let trend = weight_trend(&c).unwrap();
        assert_eq!(trend.direction, TrendDirection::Loss);
        assert_eq!(trend.magnitude, 5.0);
        assert!((trend.delta - (-5.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trend_gain_when_delta_is_zero_or_positive() {
        let flat = client("Ana", vec![weight(10, 80.0), weight(20, 80.0)]);
        assert_eq!(weight_trend(&flat).unwrap().direction, TrendDirection::Gain);

        let up = client("Ana", vec![weight(10, 80.0), weight(20, 82.3)]);
        let trend = weight_trend(&up).unwrap();
        assert_eq!(trend.direction, TrendDirection::Gain);
        assert_eq!(trend.magnitude, 2.3);
    }

    #[test]
    fn test_average_latest_weight_excludes_clients_without_weights() {
        let with = client("Ana Silva", vec![weight(1, 70.0), weight(15, 72.0)]);
        let without = client("Bruno Costa", vec![]);
        let stats = fleet_stats(&[with, without]);
        assert_eq!(stats.average_latest_weight, 72.0);
        assert_eq!(stats.total_clients, 2);
        assert_eq!(stats.total_weight_entries, 2);
    }

    #[test]
    fn test_average_latest_weight_is_zero_when_none_qualify() {
        let stats = fleet_stats(&[client("Ana", vec![]), client("Bruno", vec![])]);
        assert_eq!(stats.average_latest_weight, 0.0);
    }

    #[test]
    fn test_fleet_totals_sum_across_clients() {
        let mut a = client("Ana", vec![weight(1, 70.0)]);
        a.diets.push(DietEntry {
            id: Uuid::new_v4(),
            date: date(2),
            meal: "lunch".to_string(),
            description: String::new(),
            calories: Some(600),
            notes: None,
        });
        let b = client("Bruno", vec![weight(3, 90.0), weight(4, 89.0)]);
        let stats = fleet_stats(&[a, b]);
        assert_eq!(stats.total_weight_entries, 3);
        assert_eq!(stats.total_diets, 1);
        assert_eq!(stats.total_medications, 0);
        assert_eq!(stats.total_trainings, 0);
    }

    #[test]
    fn test_record_counts_limited_to_first_eight_clients() {
        let clients: Vec<Client> = (0..12)
            .map(|i| client(&format!("Client{} Surname", i), vec![weight(1, 70.0)]))
            .collect();
        let counts = record_counts_per_client(&clients);
        assert_eq!(counts.len(), 8);
        assert_eq!(counts[0].client, "Client0");
        assert_eq!(counts[7].client, "Client7");
        assert_eq!(counts[0].weights, 1);
    }

    #[test]
    fn test_weight_series_keeps_most_recent_ten_ascending() {
        let a = client("Ana Silva", (1..=8).map(|d| weight(d, 70.0 + d as f64)).collect());
        let b = client("Bruno Costa", (9..=14).map(|d| weight(d, 90.0)).collect());
        let series = recent_weight_series(&[a, b]);
        assert_eq!(series.len(), 10);
        // Oldest surviving point is day 5; order is ascending
        assert_eq!(series[0].date, date(5));
        assert_eq!(series[9].date, date(14));
        assert!(series.windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(series[0].client, "Ana");
        assert_eq!(series[9].client, "Bruno");
    }

    #[test]
    fn test_weight_series_tie_dates_keep_input_order() {
        let a = client("Ana Silva", vec![weight(10, 70.0)]);
        let b = client("Bruno Costa", vec![weight(10, 90.0)]);
        let series = recent_weight_series(&[a, b]);
        assert_eq!(series[0].client, "Ana");
        assert_eq!(series[1].client, "Bruno");
    }

    #[test]
    fn test_category_totals_cover_all_categories_in_order() {
        let c = client("Ana", vec![weight(1, 70.0), weight(2, 71.0)]);
        let totals = category_totals(&[c]);
        assert_eq!(totals.len(), 4);
        assert_eq!(totals[0].category, RecordCategory::Weight);
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[1].category, RecordCategory::Medication);
        assert_eq!(totals[1].count, 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_trend_sign_matches_delta(first in 20.0f64..200.0, last in 20.0f64..200.0) {
            let c = client("Ana", vec![weight(1, first), weight(20, last)]);
            let trend = weight_trend(&c).unwrap();
            if last < first {
                prop_assert_eq!(trend.direction, TrendDirection::Loss);
            } else {
                prop_assert_eq!(trend.direction, TrendDirection::Gain);
            }
            prop_assert!((trend.magnitude - ((last - first).abs() * 10.0).round() / 10.0).abs() < f64::EPSILON);
        }

        #[test]
        fn prop_series_never_exceeds_ten_points(counts in prop::collection::vec(0usize..6, 0..8)) {
            let clients: Vec<Client> = counts
                .iter()
                .enumerate()
                .map(|(i, &n)| {
                    client(
                        &format!("Client{}", i),
                        (0..n).map(|d| weight(d as u32 + 1, 70.0)).collect(),
                    )
                })
                .collect();
            let series = recent_weight_series(&clients);
            let total: usize = counts.iter().sum();
            prop_assert_eq!(series.len(), total.min(10));
        }
    }
}

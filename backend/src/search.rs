//! Client search and chronological sorting
//!
//! Read-side helpers for presentation code. Sorting is display-only and
//! never touches the stored order; both sort directions are stable, so
//! entries sharing a date keep their prior relative order.

use clinic_manager_shared::{Client, Dated};

/// Case-insensitive substring filter over client name or email.
///
/// An empty query returns all clients unchanged in original order.
pub fn filter_clients<'a>(clients: &'a [Client], query: &str) -> Vec<&'a Client> {
    if query.is_empty() {
        return clients.iter().collect();
    }
    let needle = query.to_lowercase();
    clients
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle) || c.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Entries ordered oldest-first.
pub fn sorted_by_date_ascending<T: Dated + Clone>(entries: &[T]) -> Vec<T> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.entry_date());
    sorted
}

/// Entries ordered newest-first.
pub fn sorted_by_date_descending<T: Dated + Clone>(entries: &[T]) -> Vec<T> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.entry_date().cmp(&a.entry_date()));
    sorted
}

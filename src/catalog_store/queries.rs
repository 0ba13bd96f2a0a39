//! Read-only queries over catalog slices.
//!
//! All functions here are pure: they borrow the catalog, never mutate it, and
//! return results in catalog order unless a ranking is explicitly requested.

use std::cmp::Reverse;

use super::models::{Medicine, Pharmacy, PharmacyFilter};

pub const DEFAULT_QUERY_LIMIT: usize = 5;

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Medicines whose name or composition contains `query`, case-insensitively.
///
/// A blank query yields no results rather than the whole catalog. Otherwise
/// the query is matched as given, surrounding whitespace included.
pub fn recommend(medicines: &[Medicine], query: &str, limit: usize) -> Vec<Medicine> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let normalized = query.to_lowercase();

    medicines
        .iter()
        .filter(|m| {
            contains_ignore_case(&m.name, &normalized)
                || contains_ignore_case(&m.composition, &normalized)
        })
        .take(limit)
        .cloned()
        .collect()
}

/// Medicines sorted by descending popularity. Ties keep catalog order.
pub fn top_popular(medicines: &[Medicine], limit: usize) -> Vec<Medicine> {
    let mut sorted: Vec<&Medicine> = medicines.iter().collect();
    // sort_by_key is stable
    sorted.sort_by_key(|m| Reverse(m.popularity()));
    sorted.into_iter().take(limit).cloned().collect()
}

/// Other medicines sharing the active ingredient of `source`, cheapest first.
pub fn alternatives(medicines: &[Medicine], source: &Medicine, limit: usize) -> Vec<Medicine> {
    let Some(ingredient) = source.active_ingredient() else {
        return Vec::new();
    };

    let mut matching: Vec<&Medicine> = medicines
        .iter()
        .filter(|m| m.id != source.id)
        .filter(|m| m.active_ingredient().as_deref() == Some(ingredient.as_str()))
        .collect();
    matching.sort_by(|a, b| a.price.total_cmp(&b.price));
    matching.into_iter().take(limit).cloned().collect()
}

/// Pharmacies matching `query` on name or location and the type filter.
/// Unlike medicine recommendations, a blank query matches every pharmacy.
pub fn filter_pharmacies(
    pharmacies: &[Pharmacy],
    query: &str,
    filter: PharmacyFilter,
) -> Vec<Pharmacy> {
    let normalized = query.trim().to_lowercase();
    pharmacies
        .iter()
        .filter(|p| filter.matches(p.pharmacy_type))
        .filter(|p| {
            normalized.is_empty()
                || contains_ignore_case(&p.name, &normalized)
                || contains_ignore_case(&p.location, &normalized)
        })
        .cloned()
        .collect()
}

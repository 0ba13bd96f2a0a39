//! Resolution of search hits to full catalog entries.

use serde::Serialize;

use crate::catalog_store::{CatalogStore, Medicine, Pharmacy};

use super::{SearchItemType, SearchResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolvedSearchResult {
    Medicine(Medicine),
    Pharmacy(Pharmacy),
}

/// Look up the entry behind a hit. Ids the catalog no longer knows are dropped.
pub fn resolve_to_result(
    catalog_store: &dyn CatalogStore,
    id: &str,
    item_type: SearchItemType,
) -> Option<ResolvedSearchResult> {
    match item_type {
        SearchItemType::Medicine => catalog_store
            .find_medicine(id)
            .ok()
            .cloned()
            .map(ResolvedSearchResult::Medicine),
        SearchItemType::Pharmacy => catalog_store
            .find_pharmacy(id)
            .ok()
            .cloned()
            .map(ResolvedSearchResult::Pharmacy),
    }
}

pub fn resolve_all(
    catalog_store: &dyn CatalogStore,
    results: &[SearchResult],
) -> Vec<ResolvedSearchResult> {
    results
        .iter()
        .filter_map(|r| resolve_to_result(catalog_store, &r.item_id, r.item_type))
        .collect()
}

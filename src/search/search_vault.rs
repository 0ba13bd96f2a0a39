//! Search vault trait and result types

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog_store::{CatalogStore, PharmacyFilter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchItemType {
    Medicine,
    Pharmacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub item_type: SearchItemType,
    pub item_id: String,
    pub matchable_text: String,
}

/// Statistics about the search vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchVaultStats {
    /// Number of items the vault can return
    pub indexed_items: usize,
    /// Kind of matching used, e.g. "substring"
    pub index_type: String,
}

pub trait SearchVault: Send + Sync {
    /// Search medicines and pharmacies. Medicines come first, each group in
    /// catalog order. `filter` restricts the item types returned.
    fn search(
        &self,
        query: &str,
        max_results: usize,
        filter: Option<Vec<SearchItemType>>,
    ) -> Vec<SearchResult>;

    fn get_stats(&self) -> SearchVaultStats;
}

fn wants(filter: &Option<Vec<SearchItemType>>, item_type: SearchItemType) -> bool {
    match filter {
        None => true,
        Some(types) => types.contains(&item_type),
    }
}

/// Case-insensitive substring search straight over the catalog.
pub struct SubstringSearchVault {
    catalog_store: Arc<dyn CatalogStore>,
}

impl SubstringSearchVault {
    pub fn new(catalog_store: Arc<dyn CatalogStore>) -> Self {
        SubstringSearchVault { catalog_store }
    }
}

impl SearchVault for SubstringSearchVault {
    fn search(
        &self,
        query: &str,
        max_results: usize,
        filter: Option<Vec<SearchItemType>>,
    ) -> Vec<SearchResult> {
        // Same rule as recommendations: a blank query finds nothing.
        if query.trim().is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        if wants(&filter, SearchItemType::Medicine) {
            results.extend(
                self.catalog_store
                    .recommend(query, max_results)
                    .into_iter()
                    .map(|m| SearchResult {
                        item_type: SearchItemType::Medicine,
                        item_id: m.id,
                        matchable_text: m.name,
                    }),
            );
        }
        if wants(&filter, SearchItemType::Pharmacy) {
            results.extend(
                self.catalog_store
                    .filter_pharmacies(query, PharmacyFilter::All)
                    .into_iter()
                    .map(|p| SearchResult {
                        item_type: SearchItemType::Pharmacy,
                        item_id: p.id,
                        matchable_text: p.name,
                    }),
            );
        }
        results.truncate(max_results);
        results
    }

    fn get_stats(&self) -> SearchVaultStats {
        SearchVaultStats {
            indexed_items: self.catalog_store.get_medicines_count()
                + self.catalog_store.get_pharmacies_count(),
            index_type: "substring".to_string(),
        }
    }
}

/// A no-op search vault that returns empty results.
pub struct NoopSearchVault;

impl SearchVault for NoopSearchVault {
    fn search(
        &self,
        _query: &str,
        _max_results: usize,
        _filter: Option<Vec<SearchItemType>>,
    ) -> Vec<SearchResult> {
        Vec::new()
    }

    fn get_stats(&self) -> SearchVaultStats {
        SearchVaultStats {
            indexed_items: 0,
            index_type: "noop".to_string(),
        }
    }
}

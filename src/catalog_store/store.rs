//! In-memory catalog store backed by fixed vectors.

use super::models::{Medicine, Pharmacy, Physician, SubscriptionPlan};
use super::seed;
use super::trait_def::CatalogStore;

pub struct StaticCatalogStore {
    medicines: Vec<Medicine>,
    pharmacies: Vec<Pharmacy>,
    physicians: Vec<Physician>,
    plans: Vec<SubscriptionPlan>,
}

impl StaticCatalogStore {
    pub fn new(
        medicines: Vec<Medicine>,
        pharmacies: Vec<Pharmacy>,
        physicians: Vec<Physician>,
        plans: Vec<SubscriptionPlan>,
    ) -> Self {
        Self {
            medicines,
            pharmacies,
            physicians,
            plans,
        }
    }

    /// The catalog the storefront ships with.
    pub fn sample() -> Self {
        Self::new(
            seed::sample_medicines(),
            seed::sample_pharmacies(),
            seed::sample_physicians(),
            seed::sample_plans(),
        )
    }

    pub fn empty() -> Self {
        Self::new(vec![], vec![], vec![], vec![])
    }
}

impl CatalogStore for StaticCatalogStore {
    fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    fn pharmacies(&self) -> &[Pharmacy] {
        &self.pharmacies
    }

    fn physicians(&self) -> &[Physician] {
        &self.physicians
    }

    fn plans(&self) -> &[SubscriptionPlan] {
        &self.plans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_store::{CatalogError, EntityKind, PharmacyFilter};

    #[test]
    fn finds_dolo_by_id() {
        let store = StaticCatalogStore::sample();
        let dolo = store.find_medicine("dolo650").unwrap();
        assert_eq!(dolo.name, "DOLO 650");
        assert_eq!(dolo.price, 30.0);
    }

    #[test]
    fn unknown_medicine_is_not_found() {
        let store = StaticCatalogStore::sample();
        assert_eq!(
            store.find_medicine("nonexistent"),
            Err(CatalogError::not_found(EntityKind::Medicine, "nonexistent"))
        );
    }

    #[test]
    fn finds_medicine_by_name_ignoring_case() {
        let store = StaticCatalogStore::sample();
        assert_eq!(store.find_medicine_by_name(" dolo 650 ").unwrap().id, "dolo650");
        assert!(store.find_medicine_by_name("Dolo").is_err());
    }

    #[test]
    fn alternatives_of_unknown_medicine_is_not_found() {
        let store = StaticCatalogStore::sample();
        assert!(matches!(
            store.alternatives("nope", 5),
            Err(CatalogError::NotFound {
                kind: EntityKind::Medicine,
                ..
            })
        ));
    }

    #[test]
    fn pharmacy_stock_resolves_medicines() {
        let store = StaticCatalogStore::sample();
        let stock = store.pharmacy_stock("3").unwrap();
        let ids: Vec<&str> = stock.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["dolo650", "calpol500"]);

        assert!(store.pharmacy_stock("99").is_err());
    }

    #[test]
    fn pharmacy_stock_skips_unknown_medicines() {
        let mut pharmacies = crate::catalog_store::seed::sample_pharmacies();
        pharmacies[0].stock.push("discontinued".to_string());
        let store = StaticCatalogStore::new(
            crate::catalog_store::seed::sample_medicines(),
            pharmacies,
            vec![],
            vec![],
        );
        assert_eq!(store.pharmacy_stock("1").unwrap().len(), 2);
    }

    #[test]
    fn finds_plans_and_physicians() {
        let store = StaticCatalogStore::sample();
        assert_eq!(store.find_plan("premium").unwrap().monthly_price, 199);
        assert!(store.find_plan("gold").is_err());
        assert_eq!(store.find_physician(2).unwrap().specialty, "Cardiologist");
        assert!(store.find_physician(9).is_err());
    }

    #[test]
    fn empty_store_answers_every_query() {
        let store = StaticCatalogStore::empty();
        assert!(store.recommend("dolo", 5).is_empty());
        assert!(store.top_popular(5).is_empty());
        assert!(store.filter_pharmacies("", PharmacyFilter::All).is_empty());
        assert_eq!(store.get_medicines_count(), 0);
    }

    #[test]
    fn counts_sample_catalog() {
        let store = StaticCatalogStore::sample();
        assert_eq!(store.get_medicines_count(), 12);
        assert_eq!(store.get_pharmacies_count(), 7);
        assert_eq!(store.get_physicians_count(), 4);
        assert_eq!(store.plans().len(), 3);
    }
}

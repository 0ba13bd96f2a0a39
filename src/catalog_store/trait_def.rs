//! CatalogStore trait definition.
//!
//! The catalog is reference data: implementations expose read-only slices
//! and every query is answered from them without side effects.

use super::error::{CatalogError, EntityKind};
use super::models::{Medicine, Pharmacy, PharmacyFilter, Physician, SubscriptionPlan};
use super::queries;

/// Trait for catalog storage backends.
pub trait CatalogStore: Send + Sync {
    // =========================================================================
    // Raw collections, in catalog order
    // =========================================================================

    fn medicines(&self) -> &[Medicine];

    fn pharmacies(&self) -> &[Pharmacy];

    fn physicians(&self) -> &[Physician];

    fn plans(&self) -> &[SubscriptionPlan];

    // =========================================================================
    // Medicines
    // =========================================================================

    /// Exact-match lookup. Absence is reported as `CatalogError::NotFound`.
    fn find_medicine(&self, id: &str) -> Result<&Medicine, CatalogError> {
        self.medicines()
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| CatalogError::not_found(EntityKind::Medicine, id))
    }

    /// Case-insensitive lookup by display name.
    fn find_medicine_by_name(&self, name: &str) -> Result<&Medicine, CatalogError> {
        let trimmed = name.trim();
        self.medicines()
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CatalogError::not_found(EntityKind::Medicine, trimmed))
    }

    fn recommend(&self, query: &str, limit: usize) -> Vec<Medicine> {
        queries::recommend(self.medicines(), query, limit)
    }

    fn top_popular(&self, limit: usize) -> Vec<Medicine> {
        queries::top_popular(self.medicines(), limit)
    }

    fn alternatives(&self, id: &str, limit: usize) -> Result<Vec<Medicine>, CatalogError> {
        let source = self.find_medicine(id)?;
        Ok(queries::alternatives(self.medicines(), source, limit))
    }

    // =========================================================================
    // Pharmacies
    // =========================================================================

    fn find_pharmacy(&self, id: &str) -> Result<&Pharmacy, CatalogError> {
        self.pharmacies()
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::not_found(EntityKind::Pharmacy, id))
    }

    fn filter_pharmacies(&self, query: &str, filter: PharmacyFilter) -> Vec<Pharmacy> {
        queries::filter_pharmacies(self.pharmacies(), query, filter)
    }

    /// Medicines listed by a pharmacy. Stock ids unknown to the catalog are skipped.
    fn pharmacy_stock(&self, id: &str) -> Result<Vec<Medicine>, CatalogError> {
        let pharmacy = self.find_pharmacy(id)?;
        Ok(pharmacy
            .stock
            .iter()
            .filter_map(|medicine_id| self.find_medicine(medicine_id).ok())
            .cloned()
            .collect())
    }

    // =========================================================================
    // Physicians and plans
    // =========================================================================

    fn find_physician(&self, id: u32) -> Result<&Physician, CatalogError> {
        self.physicians()
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::not_found(EntityKind::Physician, id.to_string()))
    }

    /// Case-insensitive lookup by plan name.
    fn find_plan(&self, name: &str) -> Result<&SubscriptionPlan, CatalogError> {
        let trimmed = name.trim();
        self.plans()
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CatalogError::not_found(EntityKind::Plan, trimmed))
    }

    // =========================================================================
    // Counts (for metrics)
    // =========================================================================

    fn get_medicines_count(&self) -> usize {
        self.medicines().len()
    }

    fn get_pharmacies_count(&self) -> usize {
        self.pharmacies().len()
    }

    fn get_physicians_count(&self) -> usize {
        self.physicians().len()
    }
}

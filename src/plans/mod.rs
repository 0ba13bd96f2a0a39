//! Subscription plan selection

use serde::Serialize;
use tracing::info;

use crate::catalog_store::{CatalogError, CatalogStore, SubscriptionPlan};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSelection {
    pub plan: SubscriptionPlan,
    pub message: String,
}

/// Pick a plan by name, case-insensitively.
pub fn select_plan(catalog: &dyn CatalogStore, name: &str) -> Result<PlanSelection, CatalogError> {
    let plan = catalog.find_plan(name)?.clone();
    info!("Selected plan {}", plan.name);
    Ok(PlanSelection {
        message: format!("You've selected the {} plan", plan.name),
        plan,
    })
}

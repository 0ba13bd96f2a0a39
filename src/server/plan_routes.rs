//! Subscription plan routes

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::catalog_store::SubscriptionPlan;
use crate::plans::{select_plan, PlanSelection};

use super::error::ApiResult;
use super::state::{GuardedCatalogStore, ServerState};

#[derive(Deserialize)]
struct SelectPlanBody {
    name: String,
}

async fn list_plans(State(catalog): State<GuardedCatalogStore>) -> Json<Vec<SubscriptionPlan>> {
    Json(catalog.plans().to_vec())
}

async fn post_select_plan(
    State(catalog): State<GuardedCatalogStore>,
    Json(body): Json<SelectPlanBody>,
) -> ApiResult<Json<PlanSelection>> {
    Ok(Json(select_plan(catalog.as_ref(), &body.name)?))
}

pub fn make_plan_routes(state: ServerState) -> Router {
    Router::new()
        .route("/", get(list_plans))
        .route("/select", post(post_select_plan))
        .with_state(state)
}

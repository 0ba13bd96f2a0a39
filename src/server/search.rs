//! Search API routes

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use tracing::debug;

use crate::search::{resolve_all, SearchItemType};

use super::state::ServerState;

const DEFAULT_SEARCH_LIMIT: usize = 30;
const MAX_SEARCH_LIMIT: usize = 100;

#[derive(Deserialize)]
struct SearchBody {
    pub query: String,

    /// If true, return full catalog entries instead of bare hits
    #[serde(default)]
    pub resolve: bool,

    /// Maximum number of results to return (default: 30)
    pub limit: Option<usize>,

    pub filters: Option<Vec<SearchItemType>>,
}

async fn search(State(server_state): State<ServerState>, Json(payload): Json<SearchBody>) -> Response {
    let limit = payload
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_LIMIT);

    let results = server_state
        .search_vault
        .search(payload.query.as_str(), limit, payload.filters);
    debug!("Search '{}' returned {} hits", payload.query, results.len());

    if payload.resolve {
        Json(resolve_all(server_state.catalog_store.as_ref(), &results)).into_response()
    } else {
        Json(results).into_response()
    }
}

pub fn make_search_routes(state: ServerState) -> Router {
    Router::new()
        .route("/search", post(search))
        .with_state(state)
}

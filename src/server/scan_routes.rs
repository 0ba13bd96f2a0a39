//! Simulated voice, camera and alternative-finder routes.
//!
//! A scan is started with a POST and then polled; the device delay means the
//! first status is always `pending`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::scan::{ScanRequest, ScanStatus};

use super::error::ApiResult;
use super::state::{GuardedScanManager, ServerState};

async fn start_scan(
    State(manager): State<GuardedScanManager>,
    Json(request): Json<ScanRequest>,
) -> ApiResult<Response> {
    let status = manager.start(request.kind, &request.input)?;
    Ok((StatusCode::ACCEPTED, Json(status)).into_response())
}

async fn get_scan(
    State(manager): State<GuardedScanManager>,
    Path(id): Path<String>,
) -> ApiResult<Json<ScanStatus>> {
    Ok(Json(manager.status(&id)?))
}

async fn cancel_scan(
    State(manager): State<GuardedScanManager>,
    Path(id): Path<String>,
) -> ApiResult<Json<ScanStatus>> {
    Ok(Json(manager.cancel(&id)?))
}

pub fn make_scan_routes(state: ServerState) -> Router {
    Router::new()
        .route("/", post(start_scan))
        .route("/{id}", get(get_scan).delete(cancel_scan))
        .with_state(state)
}

//! Physician directory and appointment booking routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::booking::BookingRequest;
use crate::catalog_store::Physician;

use super::error::ApiResult;
use super::state::{GuardedBookingDesk, GuardedCatalogStore, ServerState};

async fn list_physicians(State(catalog): State<GuardedCatalogStore>) -> Json<Vec<Physician>> {
    Json(catalog.physicians().to_vec())
}

async fn get_physician(
    State(catalog): State<GuardedCatalogStore>,
    Path(id): Path<u32>,
) -> ApiResult<Json<Physician>> {
    Ok(Json(catalog.find_physician(id)?.clone()))
}

async fn list_time_slots(State(desk): State<GuardedBookingDesk>) -> impl IntoResponse {
    Json(desk.time_slots())
}

async fn list_appointments(State(desk): State<GuardedBookingDesk>) -> impl IntoResponse {
    Json(desk.list_appointments())
}

async fn book_appointment(
    State(desk): State<GuardedBookingDesk>,
    Json(request): Json<BookingRequest>,
) -> ApiResult<Response> {
    let confirmation = desk.book(request)?;
    Ok((StatusCode::CREATED, Json(confirmation)).into_response())
}

pub fn make_booking_routes(state: ServerState) -> Router {
    Router::new()
        .route("/physicians", get(list_physicians))
        .route("/physicians/{id}", get(get_physician))
        .route("/slots", get(list_time_slots))
        .route(
            "/appointments",
            get(list_appointments).post(book_appointment),
        )
        .with_state(state)
}

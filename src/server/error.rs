//! Mapping from domain errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;

use crate::booking::BookingError;
use crate::catalog_store::CatalogError;
use crate::reminders::ReminderError;
use crate::scan::ScanError;

use super::metrics::record_error;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, &str) {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = self.parts();
        debug!("Responding {}: {}", status, message);
        record_error(error_type, status.as_str());
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<ReminderError> for ApiError {
    fn from(err: ReminderError) -> Self {
        match err {
            ReminderError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ReminderError::MissingMedicineName
            | ReminderError::InvalidTime(_)
            | ReminderError::NoDays => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::PhysicianNotFound(_) => ApiError::NotFound(err.to_string()),
            _ => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<ScanError> for ApiError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ScanError::EmptyInput => ApiError::BadRequest(err.to_string()),
            // Only ever recorded as a failed scan state.
            ScanError::NoMatch(_) | ScanError::Timeout(_) => ApiError::Internal(err.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_store::EntityKind;

    #[test]
    fn maps_domain_errors_to_status() {
        let status = |e: ApiError| e.into_response().status();

        assert_eq!(
            status(CatalogError::not_found(EntityKind::Medicine, "x").into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(ReminderError::InvalidTime("9".to_string()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(ReminderError::NotFound(3).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(BookingError::MissingField("phone").into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(BookingError::PhysicianNotFound(7).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status(ScanError::EmptyInput.into()), StatusCode::BAD_REQUEST);
    }
}

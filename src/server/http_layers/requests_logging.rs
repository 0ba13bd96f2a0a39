//! Request logging middleware
//!
//! Logs each request at the configured verbosity and feeds the HTTP metrics.

use super::super::state::ServerState;
use crate::server::metrics::record_http_request;
use axum::extract::{MatchedPath, State};
use axum::{
    body::Body,
    http::{header::HeaderMap, Request, Response, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use std::time::Instant;
use tracing::{error, info};

#[derive(PartialEq, PartialOrd, Clone, Debug, Default, clap::ValueEnum)]
pub enum RequestsLoggingLevel {
    None,
    #[default]
    Path,
    Headers,
    Body,
}

impl std::fmt::Display for RequestsLoggingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Bodies at least this long are summarised instead of printed.
const MAX_LOGGABLE_BODY_LENGTH: usize = 1024;

#[derive(Debug, PartialEq)]
enum BodyLength {
    Known(usize),
    Unknown(&'static str),
}

fn body_length(headers: &HeaderMap) -> BodyLength {
    let Some(value) = headers.get("content-length") else {
        return BodyLength::Unknown("no content-length");
    };
    match value.to_str().map(str::parse::<usize>) {
        Ok(Ok(length)) => BodyLength::Known(length),
        Ok(Err(_)) => BodyLength::Unknown("content-length is not a number"),
        Err(_) => BodyLength::Unknown("content-length is not valid text"),
    }
}

fn log_headers(label: &str, headers: &HeaderMap) {
    info!("  {} headers:", label);
    for (name, value) in headers.iter() {
        info!("    {:?}: {:?}", name, value);
    }
}

/// Print a small body in full, or its size. The body has to be buffered to
/// be printed, so an equivalent one is handed back.
async fn log_body(label: &str, headers: &HeaderMap, body: Body) -> Result<Body, axum::Error> {
    match body_length(headers) {
        BodyLength::Known(length) if length < MAX_LOGGABLE_BODY_LENGTH => {
            let bytes = axum::body::to_bytes(body, length).await?;
            info!("  {} body:\n{}", label, String::from_utf8_lossy(&bytes));
            Ok(Body::from(bytes))
        }
        BodyLength::Known(length) => {
            info!(
                "  {} body: too big to log ({:#})",
                label,
                byte_unit::Byte::from(length)
            );
            Ok(body)
        }
        BodyLength::Unknown(reason) => {
            info!("  {} body: {}", label, reason);
            Ok(body)
        }
    }
}

fn internal_error() -> axum::response::Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

pub async fn log_requests(
    State(state): State<ServerState>,
    mut request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let level = state.config.requests_logging_level.clone();
    let start = Instant::now();

    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    if level > RequestsLoggingLevel::None {
        info!(">>> {} {}", method, uri);
    }
    if level >= RequestsLoggingLevel::Headers {
        log_headers("Request", request.headers());
    }
    if level >= RequestsLoggingLevel::Body {
        let (parts, body) = request.into_parts();
        match log_body("Request", &parts.headers, body).await {
            Ok(body) => request = Request::from_parts(parts, body),
            Err(err) => {
                error!("Failed to read request body: {:?}", err);
                return internal_error();
            }
        }
    }

    let mut response = next.run(request).await;

    if level >= RequestsLoggingLevel::Headers {
        log_headers("Response", response.headers());
    }
    if level >= RequestsLoggingLevel::Body {
        let (parts, body) = response.into_parts();
        match log_body("Response", &parts.headers, body).await {
            Ok(body) => response = Response::from_parts(parts, body),
            Err(err) => {
                error!("Failed to read response body: {:?}", err);
                return internal_error();
            }
        }
    }

    let status = response.status().as_u16();
    let duration = start.elapsed();
    if level > RequestsLoggingLevel::None {
        info!("<<< {} {} {} ({}ms)", status, method, route, duration.as_millis());
    }
    record_http_request(&method, &route, status, duration);

    response
}

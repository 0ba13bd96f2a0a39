use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, Gauge, GaugeVec, HistogramOpts, HistogramVec, Opts, Registry,
    TextEncoder,
};
use std::time::Duration;

use crate::catalog_store::CatalogStore;

/// Metric name prefix for all server metrics
const PREFIX: &str = "pharmacy";

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Catalog Metrics
    pub static ref CATALOG_ITEMS_TOTAL: GaugeVec = GaugeVec::new(
        Opts::new(format!("{PREFIX}_catalog_items_total"), "Total items in catalog"),
        &["type"]
    ).expect("Failed to create catalog_items_total metric");

    // Notification Metrics
    pub static ref NOTIFICATIONS_UNREAD: Gauge = Gauge::new(
        format!("{PREFIX}_notifications_unread"),
        "Unread notifications in the session"
    ).expect("Failed to create notifications_unread metric");

    pub static ref NOTIFICATIONS_ADDED_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_notifications_added_total"), "Notifications posted"),
        &["category"]
    ).expect("Failed to create notifications_added_total metric");

    // Booking Metrics
    pub static ref APPOINTMENTS_BOOKED_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_appointments_booked_total"), "Appointments booked"),
        &["mode"]
    ).expect("Failed to create appointments_booked_total metric");

    // Scan Metrics
    pub static ref SCAN_OUTCOMES_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_scan_outcomes_total"), "Finished simulated scans"),
        &["kind", "outcome"]
    ).expect("Failed to create scan_outcomes_total metric");

    // Error Metrics
    pub static ref ERRORS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_errors_total"), "Errors returned to clients"),
        &["error_type", "status"]
    ).expect("Failed to create errors_total metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Register all metrics - ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(CATALOG_ITEMS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(NOTIFICATIONS_UNREAD.clone()));
    let _ = REGISTRY.register(Box::new(NOTIFICATIONS_ADDED_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(APPOINTMENTS_BOOKED_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(SCAN_OUTCOMES_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(ERRORS_TOTAL.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Initialize catalog-specific metrics
pub fn init_catalog_metrics(catalog: &dyn CatalogStore) {
    let medicines = catalog.get_medicines_count();
    let pharmacies = catalog.get_pharmacies_count();
    let physicians = catalog.get_physicians_count();

    CATALOG_ITEMS_TOTAL
        .with_label_values(&["medicine"])
        .set(medicines as f64);
    CATALOG_ITEMS_TOTAL
        .with_label_values(&["pharmacy"])
        .set(pharmacies as f64);
    CATALOG_ITEMS_TOTAL
        .with_label_values(&["physician"])
        .set(physicians as f64);

    tracing::info!(
        "Catalog metrics initialized: {} medicines, {} pharmacies, {} physicians",
        medicines,
        pharmacies,
        physicians
    );
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

pub fn set_unread_notifications(count: usize) {
    NOTIFICATIONS_UNREAD.set(count as f64);
}

pub fn record_notification_added(category: &str) {
    NOTIFICATIONS_ADDED_TOTAL
        .with_label_values(&[category])
        .inc();
}

pub fn record_appointment_booked(mode: &str) {
    APPOINTMENTS_BOOKED_TOTAL.with_label_values(&[mode]).inc();
}

/// Record a scan reaching a terminal state
pub fn record_scan_outcome(kind: &str, outcome: &str) {
    SCAN_OUTCOMES_TOTAL
        .with_label_values(&[kind, outcome])
        .inc();
}

/// Record an error response
pub fn record_error(error_type: &str, status: &str) {
    ERRORS_TOTAL
        .with_label_values(&[error_type, status])
        .inc();
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_else(|_| String::from(""));
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}

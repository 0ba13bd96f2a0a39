use anyhow::{Context, Result};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tower_http::services::ServeDir;
use tracing::{debug, error, info};

use axum::{
    extract::{Path, Query, State},
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::catalog_store::{Medicine, Pharmacy, PharmacyFilter, DEFAULT_QUERY_LIMIT};
use crate::notifications::{NotificationEvent, NotificationStore};
use crate::reminders::ReminderDispatcher;

use super::{
    booking_routes::make_booking_routes,
    error::{ApiError, ApiResult},
    http_cache, log_requests, make_search_routes,
    metrics::{
        init_catalog_metrics, init_metrics, metrics_handler, record_notification_added,
        set_unread_notifications,
    },
    notification_routes::make_notification_routes,
    plan_routes::make_plan_routes,
    reminder_routes::make_reminder_routes,
    scan_routes::make_scan_routes,
    state::*,
};

/// Upper bound on any `limit` query parameter.
const MAX_QUERY_LIMIT: usize = 50;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub medicines: usize,
    pub pharmacies: usize,
    pub unread_notifications: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug)]
struct LimitQuery {
    pub limit: Option<usize>,
}

impl LimitQuery {
    fn resolved(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT)
    }
}

#[derive(Deserialize, Debug)]
struct RecommendQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Deserialize, Debug)]
struct PharmacyQuery {
    #[serde(default)]
    pub q: String,
    #[serde(rename = "type", default)]
    pub pharmacy_type: String,
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        medicines: state.catalog_store.get_medicines_count(),
        pharmacies: state.catalog_store.get_pharmacies_count(),
        unread_notifications: state.notifications.unread_count(),
    };
    Json(stats)
}

async fn list_medicines(State(catalog): State<GuardedCatalogStore>) -> Json<Vec<Medicine>> {
    Json(catalog.medicines().to_vec())
}

async fn get_popular_medicines(
    State(catalog): State<GuardedCatalogStore>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<Medicine>> {
    Json(catalog.top_popular(query.resolved()))
}

async fn get_recommendations(
    State(catalog): State<GuardedCatalogStore>,
    Query(query): Query<RecommendQuery>,
) -> Json<Vec<Medicine>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_QUERY_LIMIT)
        .min(MAX_QUERY_LIMIT);
    Json(catalog.recommend(&query.q, limit))
}

async fn get_medicine(
    State(catalog): State<GuardedCatalogStore>,
    Path(id): Path<String>,
) -> ApiResult<Json<Medicine>> {
    Ok(Json(catalog.find_medicine(&id)?.clone()))
}

async fn get_alternatives(
    State(catalog): State<GuardedCatalogStore>,
    Path(id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<Json<Vec<Medicine>>> {
    Ok(Json(catalog.alternatives(&id, query.resolved())?))
}

async fn list_pharmacies(
    State(catalog): State<GuardedCatalogStore>,
    Query(query): Query<PharmacyQuery>,
) -> ApiResult<Json<Vec<Pharmacy>>> {
    let filter = PharmacyFilter::from_str(&query.pharmacy_type).map_err(ApiError::BadRequest)?;
    Ok(Json(catalog.filter_pharmacies(&query.q, filter)))
}

async fn get_pharmacy(
    State(catalog): State<GuardedCatalogStore>,
    Path(id): Path<String>,
) -> ApiResult<Json<Pharmacy>> {
    Ok(Json(catalog.find_pharmacy(&id)?.clone()))
}

async fn get_pharmacy_stock(
    State(catalog): State<GuardedCatalogStore>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Medicine>>> {
    Ok(Json(catalog.pharmacy_stock(&id)?))
}

pub fn make_app(state: ServerState) -> Result<Router> {
    let config = state.config.clone();

    let catalog_routes: Router = Router::new()
        .route("/medicines", get(list_medicines))
        .route("/medicines/popular", get(get_popular_medicines))
        .route("/medicines/recommend", get(get_recommendations))
        .route("/medicines/{id}", get(get_medicine))
        .route("/medicines/{id}/alternatives", get(get_alternatives))
        .route("/pharmacies", get(list_pharmacies))
        .route("/pharmacies/{id}", get(get_pharmacy))
        .route("/pharmacies/{id}/stock", get(get_pharmacy_stock))
        .layer(middleware::from_fn_with_state(
            config.content_cache_age_sec,
            http_cache,
        ))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    let app: Router = home_router
        .nest("/v1/catalog", catalog_routes)
        .nest("/v1/notifications", make_notification_routes(state.clone()))
        .nest("/v1/reminders", make_reminder_routes(state.clone()))
        .nest("/v1/booking", make_booking_routes(state.clone()))
        .nest("/v1/plans", make_plan_routes(state.clone()))
        .nest("/v1/scan", make_scan_routes(state.clone()))
        .nest("/v1", make_search_routes(state.clone()));

    let app = app.layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

/// Keeps the notification gauges in step with the store.
fn spawn_notification_metrics(
    store: Arc<NotificationStore>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    let mut events = store.subscribe();
    set_unread_notifications(store.unread_count());

    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                received = events.recv() => match received {
                    Ok(event) => {
                        if let NotificationEvent::Added { notification } = &event {
                            record_notification_added(notification.category.as_str());
                        }
                        set_unread_notifications(store.unread_count());
                    }
                    Err(RecvError::Lagged(_)) => set_unread_notifications(store.unread_count()),
                    Err(RecvError::Closed) => break,
                },
            }
        }
        debug!("Notification metrics watcher stopped");
    })
}

async fn shutdown_signal(cancel: CancellationToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => match result {
            Ok(()) => info!("Shutdown signal received"),
            Err(err) => {
                error!("Failed to listen for shutdown signal: {}", err);
                cancel.cancelled().await;
            }
        },
        _ = cancel.cancelled() => {}
    }
    cancel.cancel();
}

pub async fn run_server(
    state: ServerState,
    metrics_port: u16,
    reminder_dispatch_interval: Duration,
) -> Result<()> {
    init_metrics();
    init_catalog_metrics(state.catalog_store.as_ref());

    let shutdown = CancellationToken::new();

    let dispatcher = ReminderDispatcher::new(state.reminders.clone(), state.notifications.clone())
        .spawn(reminder_dispatch_interval, shutdown.clone());
    let notification_metrics =
        spawn_notification_metrics(state.notifications.clone(), shutdown.clone());

    let metrics_listener = TcpListener::bind(("0.0.0.0", metrics_port))
        .await
        .with_context(|| format!("Failed to bind metrics port {}", metrics_port))?;
    info!("Metrics listening on {}", metrics_listener.local_addr()?);
    let metrics_app = Router::new().route("/metrics", get(metrics_handler));
    let metrics_shutdown = shutdown.clone();
    let metrics_server = tokio::spawn(async move {
        axum::serve(metrics_listener, metrics_app)
            .with_graceful_shutdown(async move { metrics_shutdown.cancelled().await })
            .await
    });

    let port = state.config.port;
    let scan_manager = state.scan_manager.clone();
    let app = make_app(state)?;
    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown.clone()))
        .await
        .context("Server failed")?;

    shutdown.cancel();
    scan_manager.cancel_all();
    if let Err(err) = dispatcher.await {
        error!("Reminder dispatcher ended abnormally: {}", err);
    }
    if let Err(err) = notification_metrics.await {
        error!("Notification metrics watcher ended abnormally: {}", err);
    }
    match metrics_server.await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => error!("Metrics server failed: {}", err),
        Err(err) => error!("Metrics server task ended abnormally: {}", err),
    }

    info!("Server stopped");
    Ok(())
}

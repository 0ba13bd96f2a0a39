//! Notification API routes

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    routing::{get, post},
    Json, Router,
};
use futures::stream::{self, Stream, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;

use crate::notifications::{
    NotificationCategory, NotificationSnapshot, ALL_READ_MESSAGE, CLEARED_MESSAGE,
};

use super::error::{ApiError, ApiResult};
use super::state::{GuardedNotificationStore, ServerState};

#[derive(Deserialize)]
struct AddNotificationBody {
    title: String,
    message: String,
    category: NotificationCategory,
}

#[derive(Serialize)]
struct UnreadCountResponse {
    unread_count: usize,
}

#[derive(Serialize)]
struct MarkReadResponse {
    id: String,
    changed: bool,
    unread_count: usize,
}

#[derive(Serialize)]
struct BulkUpdateResponse {
    message: &'static str,
    affected: usize,
    unread_count: usize,
}

async fn list_notifications(
    State(store): State<GuardedNotificationStore>,
) -> Json<NotificationSnapshot> {
    Json(store.snapshot())
}

async fn get_unread_count(State(store): State<GuardedNotificationStore>) -> impl IntoResponse {
    Json(UnreadCountResponse {
        unread_count: store.unread_count(),
    })
}

async fn add_notification(
    State(store): State<GuardedNotificationStore>,
    Json(body): Json<AddNotificationBody>,
) -> ApiResult<Response> {
    if body.title.trim().is_empty() {
        return Err(ApiError::BadRequest("Notification title is required".to_string()));
    }
    let notification = store.add(body.title, body.message, body.category);
    Ok((StatusCode::CREATED, Json(notification)).into_response())
}

async fn mark_as_read(
    State(store): State<GuardedNotificationStore>,
    Path(id): Path<String>,
) -> Json<MarkReadResponse> {
    // Unknown ids are not an error, the list just stays as it is.
    let changed = store.mark_as_read(&id);
    Json(MarkReadResponse {
        id,
        changed,
        unread_count: store.unread_count(),
    })
}

async fn mark_all_as_read(State(store): State<GuardedNotificationStore>) -> impl IntoResponse {
    let affected = store.mark_all_as_read();
    Json(BulkUpdateResponse {
        message: ALL_READ_MESSAGE,
        affected,
        unread_count: store.unread_count(),
    })
}

async fn clear_notifications(State(store): State<GuardedNotificationStore>) -> impl IntoResponse {
    let affected = store.clear();
    Json(BulkUpdateResponse {
        message: CLEARED_MESSAGE,
        affected,
        unread_count: store.unread_count(),
    })
}

fn to_sse_event<T: Serialize>(name: &str, payload: &T) -> Event {
    let json = serde_json::to_string(payload).unwrap_or_else(|_| "{}".to_string());
    Event::default().event(name).data(json)
}

/// Server-sent events: a `snapshot` first, then one event per store change.
async fn notification_events(
    State(store): State<GuardedNotificationStore>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (snapshot, receiver) = store.subscribe_with_snapshot();
    let snapshot = to_sse_event("snapshot", &snapshot);

    let updates = stream::unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    let sse_event = to_sse_event(event.name(), &event);
                    return Some((Ok(sse_event), receiver));
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Notification stream lagged, skipped {} events", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    let stream = stream::once(async move { Ok(snapshot) }).chain(updates);
    Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15)))
}

pub fn make_notification_routes(state: ServerState) -> Router {
    Router::new()
        .route(
            "/",
            get(list_notifications)
                .post(add_notification)
                .delete(clear_notifications),
        )
        .route("/unread_count", get(get_unread_count))
        .route("/read_all", post(mark_all_as_read))
        .route("/{id}/read", post(mark_as_read))
        .route("/events", get(notification_events))
        .with_state(state)
}

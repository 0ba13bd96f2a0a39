//! Medication reminder API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::reminders::{
    added_message, format_days, updated_message, Reminder, ReminderDraft, DELETED_MESSAGE,
};

use super::error::ApiResult;
use super::state::{GuardedReminderStore, ServerState};

/// A reminder plus its human-readable day summary.
#[derive(Serialize)]
struct ReminderView {
    #[serde(flatten)]
    reminder: Reminder,
    days_label: String,
}

impl From<Reminder> for ReminderView {
    fn from(reminder: Reminder) -> Self {
        ReminderView {
            days_label: format_days(&reminder.days),
            reminder,
        }
    }
}

#[derive(Serialize)]
struct ReminderChange {
    reminder: ReminderView,
    message: String,
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

async fn list_reminders(State(store): State<GuardedReminderStore>) -> impl IntoResponse {
    let views: Vec<ReminderView> = store.list().into_iter().map(ReminderView::from).collect();
    Json(views)
}

async fn get_reminder(
    State(store): State<GuardedReminderStore>,
    Path(id): Path<u32>,
) -> ApiResult<Json<ReminderView>> {
    Ok(Json(store.get(id)?.into()))
}

async fn add_reminder(
    State(store): State<GuardedReminderStore>,
    Json(draft): Json<ReminderDraft>,
) -> ApiResult<Response> {
    let reminder = store.add(draft)?;
    let change = ReminderChange {
        message: added_message(&reminder),
        reminder: reminder.into(),
    };
    Ok((StatusCode::CREATED, Json(change)).into_response())
}

async fn update_reminder(
    State(store): State<GuardedReminderStore>,
    Path(id): Path<u32>,
    Json(draft): Json<ReminderDraft>,
) -> ApiResult<Json<ReminderChange>> {
    let reminder = store.update(id, draft)?;
    Ok(Json(ReminderChange {
        message: updated_message(&reminder),
        reminder: reminder.into(),
    }))
}

async fn delete_reminder(
    State(store): State<GuardedReminderStore>,
    Path(id): Path<u32>,
) -> ApiResult<Json<MessageResponse>> {
    store.delete(id)?;
    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE,
    }))
}

async fn toggle_reminder(
    State(store): State<GuardedReminderStore>,
    Path(id): Path<u32>,
) -> ApiResult<Json<ReminderView>> {
    Ok(Json(store.toggle_active(id)?.into()))
}

pub fn make_reminder_routes(state: ServerState) -> Router {
    Router::new()
        .route("/", get(list_reminders).post(add_reminder))
        .route(
            "/{id}",
            get(get_reminder)
                .put(update_reminder)
                .delete(delete_reminder),
        )
        .route("/{id}/toggle", post(toggle_reminder))
        .with_state(state)
}

//! Notification data models

use serde::{Deserialize, Serialize};

/// What a notification is about. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    Medicine,
    Pharmacy,
    Reminder,
    System,
}

impl NotificationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::Medicine => "medicine",
            NotificationCategory::Pharmacy => "pharmacy",
            NotificationCategory::Reminder => "reminder",
            NotificationCategory::System => "system",
        }
    }
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    /// Unix timestamp (seconds). Rendering as relative time is up to the client.
    pub created_at: i64,
    pub read: bool,
    pub category: NotificationCategory,
}

/// Change applied to a notification store, delivered to subscribers in
/// mutation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationEvent {
    Added { notification: Notification },
    Read { id: String },
    AllRead,
    Cleared,
}

impl NotificationEvent {
    pub fn name(&self) -> &'static str {
        match self {
            NotificationEvent::Added { .. } => "added",
            NotificationEvent::Read { .. } => "read",
            NotificationEvent::AllRead => "all_read",
            NotificationEvent::Cleared => "cleared",
        }
    }
}

/// The notification list together with the unread count derived from it,
/// taken under a single lock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationSnapshot {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

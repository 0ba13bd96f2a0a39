//! In-memory notification store for one session.
//!
//! The store owns the ordered list (most recent first) and is the only way to
//! change it. Every operation takes the lock exactly once, so the unread count
//! read by one caller always matches the list it was computed from, even when
//! the store is shared between request handlers on several threads.

use std::sync::{Mutex, MutexGuard};

use tokio::sync::broadcast;
use tracing::{debug, info};

use super::models::{
    Notification, NotificationCategory, NotificationEvent, NotificationSnapshot,
};

const EVENTS_CHANNEL_CAPACITY: usize = 64;

pub struct NotificationStore {
    notifications: Mutex<Vec<Notification>>,
    events_tx: broadcast::Sender<NotificationEvent>,
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_notifications(Vec::new())
    }

    /// Create a store holding the sample notifications shown at session start.
    pub fn seeded() -> Self {
        let now = chrono::Utc::now().timestamp();
        let sample = |id: &str,
                      title: &str,
                      message: &str,
                      age_secs: i64,
                      read: bool,
                      category: NotificationCategory| {
            Notification {
                id: id.to_string(),
                title: title.to_string(),
                message: message.to_string(),
                created_at: now - age_secs,
                read,
                category,
            }
        };

        Self::with_notifications(vec![
            sample(
                "1",
                "Reminder",
                "Time to take your medication: Dolo 650",
                5 * 60,
                false,
                NotificationCategory::Reminder,
            ),
            sample(
                "2",
                "Discount Alert",
                "New offer on Apollo Pharmacy - Get 20% off on all medicines",
                2 * 60 * 60,
                false,
                NotificationCategory::Pharmacy,
            ),
            sample(
                "3",
                "Medicine Delivered",
                "Your order #12345 has been delivered",
                24 * 60 * 60,
                true,
                NotificationCategory::Medicine,
            ),
            sample(
                "4",
                "New Feature",
                "Try our new voice search feature to find medicines faster",
                3 * 24 * 60 * 60,
                true,
                NotificationCategory::System,
            ),
        ])
    }

    /// Create a store from an existing list, most recent first.
    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        let (events_tx, _) = broadcast::channel(EVENTS_CHANNEL_CAPACITY);
        Self {
            notifications: Mutex::new(notifications),
            events_tx,
        }
    }

    // A panic while holding the lock cannot leave the list half-written:
    // every mutation is a single push/flag flip/clear.
    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.notifications
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // Sent while the lock is held so subscribers see events in mutation order.
    fn emit(&self, event: NotificationEvent) {
        // An error only means nobody is subscribed.
        if self.events_tx.send(event).is_err() {
            debug!("No notification subscribers");
        }
    }

    /// Subscribe to changes. Events are only sent for mutations that changed
    /// something.
    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.events_tx.subscribe()
    }

    /// Create an unread notification and put it at the front of the list.
    pub fn add(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        category: NotificationCategory,
    ) -> Notification {
        let notification = Notification {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            message: message.into(),
            created_at: chrono::Utc::now().timestamp(),
            read: false,
            category,
        };

        let mut notifications = self.lock();
        notifications.insert(0, notification.clone());
        info!(
            "Added {:?} notification {} ({})",
            category, notification.id, notification.title
        );
        self.emit(NotificationEvent::Added {
            notification: notification.clone(),
        });

        notification
    }

    /// Mark one notification as read. Unknown or already-read ids are
    /// tolerated. Returns whether anything changed.
    pub fn mark_as_read(&self, id: &str) -> bool {
        let mut notifications = self.lock();
        match notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) if !notification.read => {
                notification.read = true;
                debug!("Marked notification {} as read", id);
                self.emit(NotificationEvent::Read { id: id.to_string() });
                true
            }
            Some(_) => false,
            None => {
                debug!("Ignoring mark-as-read for unknown notification {}", id);
                false
            }
        }
    }

    /// Mark every notification as read. Returns how many were unread.
    pub fn mark_all_as_read(&self) -> usize {
        let mut notifications = self.lock();
        let mut changed = 0;
        for notification in notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        if changed > 0 {
            info!("Marked {} notifications as read", changed);
            self.emit(NotificationEvent::AllRead);
        }
        changed
    }

    /// Remove every notification. Returns how many were removed.
    pub fn clear(&self) -> usize {
        let mut notifications = self.lock();
        let removed = notifications.len();
        notifications.clear();
        if removed > 0 {
            info!("Cleared {} notifications", removed);
            self.emit(NotificationEvent::Cleared);
        }
        removed
    }

    /// Number of unread notifications, computed from the current list.
    pub fn unread_count(&self) -> usize {
        count_unread(&self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the list, most recent first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    pub fn get(&self, id: &str) -> Option<Notification> {
        self.lock().iter().find(|n| n.id == id).cloned()
    }

    /// List and unread count read under the same lock.
    pub fn snapshot(&self) -> NotificationSnapshot {
        snapshot_of(&self.lock())
    }

    /// Snapshot plus a receiver for every change after it. Both are taken
    /// under one lock, and events are sent while holding it, so each change
    /// is either in the snapshot or on the receiver, never both.
    pub fn subscribe_with_snapshot(
        &self,
    ) -> (NotificationSnapshot, broadcast::Receiver<NotificationEvent>) {
        let notifications = self.lock();
        let receiver = self.events_tx.subscribe();
        (snapshot_of(&notifications), receiver)
    }
}

fn snapshot_of(notifications: &[Notification]) -> NotificationSnapshot {
    NotificationSnapshot {
        unread_count: count_unread(notifications),
        notifications: notifications.to_vec(),
    }
}

fn count_unread(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

//! Turns due reminders into notifications.
//!
//! Runs as a background task ticking on a fixed interval. Each reminder fires
//! at most once per calendar minute, however often the task ticks.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::notifications::{NotificationCategory, NotificationStore};

use super::store::ReminderStore;

pub struct ReminderDispatcher {
    reminders: Arc<ReminderStore>,
    notifications: Arc<NotificationStore>,
    /// Minute (as "%Y-%m-%d %H:%M") of the last dispatch and the reminder ids
    /// already fired in it.
    last_minute: Option<String>,
    fired: HashSet<u32>,
}

impl ReminderDispatcher {
    pub fn new(reminders: Arc<ReminderStore>, notifications: Arc<NotificationStore>) -> Self {
        Self {
            reminders,
            notifications,
            last_minute: None,
            fired: HashSet::new(),
        }
    }

    /// Post a notification for every reminder due at `now` that has not fired
    /// yet this minute. Returns how many were posted.
    pub fn dispatch(&mut self, now: NaiveDateTime) -> usize {
        let minute = now.format("%Y-%m-%d %H:%M").to_string();
        if self.last_minute.as_deref() != Some(minute.as_str()) {
            self.last_minute = Some(minute);
            self.fired.clear();
        }

        let mut posted = 0;
        for reminder in self.reminders.due_at(now) {
            if !self.fired.insert(reminder.id) {
                continue;
            }
            self.notifications.add(
                "Reminder",
                format!("Time to take your medication: {}", reminder.medicine_name),
                NotificationCategory::Reminder,
            );
            posted += 1;
        }

        if posted > 0 {
            info!("Dispatched {} medication reminders", posted);
        }
        posted
    }

    /// Spawn the dispatch loop. It stops when `cancel` is triggered.
    pub fn spawn(mut self, interval: Duration, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!("Reminder dispatcher stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        self.dispatch(chrono::Local::now().naive_local());
                    }
                }
            }
        })
    }
}

//! In-memory reminder list.

use std::sync::{Mutex, MutexGuard};

use chrono::{Datelike, NaiveDateTime, NaiveTime};
use thiserror::Error;
use tracing::info;

use super::models::{Reminder, ReminderDay, ReminderDraft};

const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReminderError {
    #[error("Medicine name is required")]
    MissingMedicineName,
    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
    #[error("At least one day is required")]
    NoDays,
    #[error("Reminder not found: {0}")]
    NotFound(u32),
}

pub struct ReminderStore {
    reminders: Mutex<Vec<Reminder>>,
}

impl Default for ReminderStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Validated and normalised draft fields.
struct CheckedDraft {
    medicine_name: String,
    time: String,
    days: Vec<ReminderDay>,
    active: bool,
}

fn check_draft(draft: ReminderDraft) -> Result<CheckedDraft, ReminderError> {
    let medicine_name = draft.medicine_name.trim().to_string();
    if medicine_name.is_empty() {
        return Err(ReminderError::MissingMedicineName);
    }

    let time = NaiveTime::parse_from_str(draft.time.trim(), TIME_FORMAT)
        .map_err(|_| ReminderError::InvalidTime(draft.time.clone()))?
        .format(TIME_FORMAT)
        .to_string();

    let mut days: Vec<ReminderDay> = Vec::with_capacity(draft.days.len());
    for day in draft.days {
        if !days.contains(&day) {
            days.push(day);
        }
    }
    if days.is_empty() {
        return Err(ReminderError::NoDays);
    }

    Ok(CheckedDraft {
        medicine_name,
        time,
        days,
        active: draft.active,
    })
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::with_reminders(Vec::new())
    }

    pub fn with_reminders(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: Mutex::new(reminders),
        }
    }

    /// The reminders a new session starts with.
    pub fn seeded() -> Self {
        use ReminderDay::*;
        let reminder = |id: u32,
                        medicine_name: &str,
                        time: &str,
                        days: Vec<ReminderDay>,
                        active: bool| {
            Reminder {
                id,
                medicine_name: medicine_name.to_string(),
                time: time.to_string(),
                days,
                active,
            }
        };
        Self::with_reminders(vec![
            reminder(
                1,
                "Dolo 650",
                "08:00",
                vec![Monday, Tuesday, Wednesday, Thursday, Friday],
                true,
            ),
            reminder(2, "Vitamin D3", "09:30", vec![Monday, Wednesday, Friday], true),
            reminder(3, "Crocin", "20:00", vec![Everyday], false),
        ])
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Reminder>> {
        self.reminders
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn list(&self) -> Vec<Reminder> {
        self.lock().clone()
    }

    pub fn get(&self, id: u32) -> Result<Reminder, ReminderError> {
        self.lock()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ReminderError::NotFound(id))
    }

    /// Add a reminder. Its id is one more than the largest id in the list.
    pub fn add(&self, draft: ReminderDraft) -> Result<Reminder, ReminderError> {
        let checked = check_draft(draft)?;
        let mut reminders = self.lock();
        let id = reminders.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let reminder = Reminder {
            id,
            medicine_name: checked.medicine_name,
            time: checked.time,
            days: checked.days,
            active: checked.active,
        };
        reminders.push(reminder.clone());
        info!(
            "Added reminder {} for {} at {}",
            id, reminder.medicine_name, reminder.time
        );
        Ok(reminder)
    }

    pub fn update(&self, id: u32, draft: ReminderDraft) -> Result<Reminder, ReminderError> {
        let checked = check_draft(draft)?;
        let mut reminders = self.lock();
        let reminder = reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ReminderError::NotFound(id))?;
        reminder.medicine_name = checked.medicine_name;
        reminder.time = checked.time;
        reminder.days = checked.days;
        reminder.active = checked.active;
        info!("Updated reminder {}", id);
        Ok(reminder.clone())
    }

    pub fn delete(&self, id: u32) -> Result<Reminder, ReminderError> {
        let mut reminders = self.lock();
        let index = reminders
            .iter()
            .position(|r| r.id == id)
            .ok_or(ReminderError::NotFound(id))?;
        info!("Deleted reminder {}", id);
        Ok(reminders.remove(index))
    }

    /// Flip a reminder between active and paused.
    pub fn toggle_active(&self, id: u32) -> Result<Reminder, ReminderError> {
        let mut reminders = self.lock();
        let reminder = reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ReminderError::NotFound(id))?;
        reminder.active = !reminder.active;
        info!("Reminder {} active: {}", id, reminder.active);
        Ok(reminder.clone())
    }

    /// Active reminders scheduled for the minute of `at`.
    pub fn due_at(&self, at: NaiveDateTime) -> Vec<Reminder> {
        let minute = at.format(TIME_FORMAT).to_string();
        let weekday = at.weekday();
        self.lock()
            .iter()
            .filter(|r| r.active && r.time == minute)
            .filter(|r| r.days.iter().any(|d| d.covers(weekday)))
            .cloned()
            .collect()
    }
}

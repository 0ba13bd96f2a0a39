//! Medication reminders

mod dispatcher;
mod models;
mod store;

pub use dispatcher::ReminderDispatcher;
pub use models::{format_days, Reminder, ReminderDay, ReminderDraft};
pub use store::{ReminderError, ReminderStore};

pub fn added_message(reminder: &Reminder) -> String {
    format!("Reminder added for {}", reminder.medicine_name)
}

pub fn updated_message(reminder: &Reminder) -> String {
    format!("Reminder updated for {}", reminder.medicine_name)
}

pub const DELETED_MESSAGE: &str = "Reminder deleted";

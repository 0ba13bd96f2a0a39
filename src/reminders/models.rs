//! Reminder data models

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A day a reminder fires on. `Everyday` stands in for the whole week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReminderDay {
    Everyday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl ReminderDay {
    pub const WEEK: [ReminderDay; 7] = [
        ReminderDay::Sunday,
        ReminderDay::Monday,
        ReminderDay::Tuesday,
        ReminderDay::Wednesday,
        ReminderDay::Thursday,
        ReminderDay::Friday,
        ReminderDay::Saturday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderDay::Everyday => "Everyday",
            ReminderDay::Sunday => "Sunday",
            ReminderDay::Monday => "Monday",
            ReminderDay::Tuesday => "Tuesday",
            ReminderDay::Wednesday => "Wednesday",
            ReminderDay::Thursday => "Thursday",
            ReminderDay::Friday => "Friday",
            ReminderDay::Saturday => "Saturday",
        }
    }

    /// Whether a reminder scheduled on this day fires on `weekday`.
    pub fn covers(&self, weekday: Weekday) -> bool {
        match self {
            ReminderDay::Everyday => true,
            day => *day == ReminderDay::from(weekday),
        }
    }
}

impl From<Weekday> for ReminderDay {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => ReminderDay::Sunday,
            Weekday::Mon => ReminderDay::Monday,
            Weekday::Tue => ReminderDay::Tuesday,
            Weekday::Wed => ReminderDay::Wednesday,
            Weekday::Thu => ReminderDay::Thursday,
            Weekday::Fri => ReminderDay::Friday,
            Weekday::Sat => ReminderDay::Saturday,
        }
    }
}

impl std::fmt::Display for ReminderDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: u32,
    pub medicine_name: String,
    /// 24h "HH:MM".
    pub time: String,
    pub days: Vec<ReminderDay>,
    pub active: bool,
}

/// User-supplied fields for creating or editing a reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderDraft {
    pub medicine_name: String,
    pub time: String,
    #[serde(default = "default_days")]
    pub days: Vec<ReminderDay>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_days() -> Vec<ReminderDay> {
    vec![ReminderDay::Everyday]
}

fn default_active() -> bool {
    true
}

/// Human-readable summary of a reminder's days.
pub fn format_days(days: &[ReminderDay]) -> String {
    if days.contains(&ReminderDay::Everyday) {
        return "Everyday".to_string();
    }
    let distinct_week_days = ReminderDay::WEEK.iter().filter(|d| days.contains(d)).count();
    if distinct_week_days == ReminderDay::WEEK.len() {
        return "Everyday".to_string();
    }
    if days.len() <= 3 {
        return days
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ");
    }
    format!("{} days", days.len())
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationMode {
    #[default]
    Online,
    Clinic,
}

impl ConsultationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationMode::Online => "online",
            ConsultationMode::Clinic => "clinic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub physician_id: u32,
    pub patient_name: String,
    pub phone: String,
    /// ISO date, "YYYY-MM-DD".
    pub date: String,
    /// One of the bookable time slots, e.g. "10:30 AM".
    pub time: String,
    #[serde(default)]
    pub mode: ConsultationMode,
    #[serde(default)]
    pub symptoms: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub physician_id: u32,
    pub physician_name: String,
    pub patient_name: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: String,
    pub mode: ConsultationMode,
    pub symptoms: Option<String>,
    pub booked_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    pub appointment: Appointment,
    pub message: String,
}

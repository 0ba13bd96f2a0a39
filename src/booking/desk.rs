//! Validates booking requests and keeps the session's appointments.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::info;

use crate::catalog_store::{CatalogStore, TIME_SLOTS};
use crate::notifications::{NotificationCategory, NotificationStore};
use crate::server::metrics::record_appointment_booked;

use super::models::{Appointment, BookingConfirmation, BookingRequest};

lazy_static! {
    // Optional leading '+', then 7 to 15 digits; spaces and dashes allowed between.
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9](?:[ -]?[0-9]){6,14}$").expect("Failed to compile phone regex");
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Physician not found: {0}")]
    PhysicianNotFound(u32),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Date is in the past: {0}")]
    DateInPast(NaiveDate),
    #[error("Unknown time slot: {0}")]
    UnknownTimeSlot(String),
}

pub struct BookingDesk {
    catalog: Arc<dyn CatalogStore>,
    notifications: Arc<NotificationStore>,
    appointments: Mutex<Vec<Appointment>>,
}

fn require(value: &str, field: &'static str) -> Result<String, BookingError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BookingError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

impl BookingDesk {
    pub fn new(catalog: Arc<dyn CatalogStore>, notifications: Arc<NotificationStore>) -> Self {
        Self {
            catalog,
            notifications,
            appointments: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Appointment>> {
        self.appointments
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn time_slots(&self) -> &'static [&'static str] {
        &TIME_SLOTS
    }

    pub fn list_appointments(&self) -> Vec<Appointment> {
        self.lock().clone()
    }

    /// Book against today's local date.
    pub fn book(&self, request: BookingRequest) -> Result<BookingConfirmation, BookingError> {
        self.book_on(request, chrono::Local::now().date_naive())
    }

    /// Validate and store an appointment, posting a confirmation notification.
    pub fn book_on(
        &self,
        request: BookingRequest,
        today: NaiveDate,
    ) -> Result<BookingConfirmation, BookingError> {
        let physician = self
            .catalog
            .find_physician(request.physician_id)
            .map_err(|_| BookingError::PhysicianNotFound(request.physician_id))?;

        let patient_name = require(&request.patient_name, "patient_name")?;
        let phone = require(&request.phone, "phone")?;
        if !PHONE_RE.is_match(&phone) {
            return Err(BookingError::InvalidPhone(phone));
        }

        let raw_date = require(&request.date, "date")?;
        let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
            .map_err(|_| BookingError::InvalidDate(raw_date.clone()))?;
        if date < today {
            return Err(BookingError::DateInPast(date));
        }

        let time = require(&request.time, "time")?;
        if !TIME_SLOTS.contains(&time.as_str()) {
            return Err(BookingError::UnknownTimeSlot(time));
        }

        let symptoms = request
            .symptoms
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let appointment = Appointment {
            id: uuid::Uuid::new_v4().to_string(),
            physician_id: physician.id,
            physician_name: physician.name.clone(),
            patient_name,
            phone,
            date,
            time,
            mode: request.mode,
            symptoms,
            booked_at: chrono::Utc::now().timestamp(),
        };

        self.lock().push(appointment.clone());
        record_appointment_booked(appointment.mode.as_str());
        info!(
            "Booked appointment {} with {} on {} at {}",
            appointment.id, appointment.physician_name, appointment.date, appointment.time
        );

        let message = format!(
            "Your appointment with {} has been booked.",
            appointment.physician_name
        );
        self.notifications.add(
            "Appointment booked",
            format!(
                "{} on {} at {}",
                appointment.physician_name, appointment.date, appointment.time
            ),
            NotificationCategory::System,
        );

        Ok(BookingConfirmation {
            appointment,
            message,
        })
    }
}

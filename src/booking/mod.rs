//! Physician appointment booking

mod desk;
mod models;

pub use desk::{BookingDesk, BookingError};
pub use models::{Appointment, BookingConfirmation, BookingRequest, ConsultationMode};

//! Session notifications module

mod models;
mod store;

pub use models::{Notification, NotificationCategory, NotificationEvent, NotificationSnapshot};
pub use store::NotificationStore;

/// Status strings surfaced to the user after bulk mutations.
pub const ALL_READ_MESSAGE: &str = "All notifications marked as read";
pub const CLEARED_MESSAGE: &str = "All notifications cleared";

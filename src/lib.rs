//! Pharmacy Catalog Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod booking;
pub mod catalog_store;
pub mod config;
pub mod notifications;
pub mod plans;
pub mod reminders;
pub mod scan;
pub mod search;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog_store::{CatalogStore, StaticCatalogStore};
pub use notifications::NotificationStore;
pub use search::{NoopSearchVault, SearchVault, SubstringSearchVault};
pub use server::{run_server, RequestsLoggingLevel};

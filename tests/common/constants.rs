//! Shared constants for end-to-end tests
//!
//! When the sample catalog changes, update only this file.

// ============================================================================
// Sample Catalog IDs
// ============================================================================

/// "DOLO 650", the most popular medicine
pub const MEDICINE_DOLO_ID: &str = "dolo650";

/// "Crocin 500", cheapest paracetamol alternative to DOLO 650
pub const MEDICINE_CROCIN_ID: &str = "crocin500";

/// "Montair 10", shares its active ingredient with nothing else
pub const MEDICINE_MONTAIR_ID: &str = "montair10";

/// "Apollo Pharmacy", a chain
pub const PHARMACY_APOLLO_ID: &str = "3";

/// "Dr. Rajesh Kumar", cardiologist
pub const PHYSICIAN_RAJESH_ID: u32 = 2;

/// A bookable slot
pub const TIME_SLOT: &str = "10:30 AM";

// ============================================================================
// Sample session data
// ============================================================================

pub const SEEDED_NOTIFICATIONS: usize = 4;
pub const SEEDED_UNREAD_NOTIFICATIONS: usize = 2;
pub const SEEDED_REMINDERS: usize = 3;

// ============================================================================
// Timing
// ============================================================================

/// Simulated device delay used by test servers
pub const SCAN_DELAY_MS: u64 = 50;

/// Scan timeout used by test servers
pub const SCAN_TIMEOUT_MS: u64 = 2000;

/// Maximum time to wait for the server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

/// Per-request timeout for the test client
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

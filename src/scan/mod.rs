mod manager;
mod models;

pub use manager::{resolve, ScanError, ScanManager, ScanSettings};
pub use models::{ScanKind, ScanRequest, ScanState, ScanStatus};

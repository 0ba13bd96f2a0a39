use serde::{Deserialize, Serialize};

use crate::catalog_store::Medicine;

/// The simulated device a lookup stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanKind {
    /// Spoken query, already transcribed to text.
    Voice,
    /// Text read off a medicine strip or box.
    Camera,
    /// Name of a medicine to find cheaper equivalents for.
    Alternative,
}

impl ScanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanKind::Voice => "voice",
            ScanKind::Camera => "camera",
            ScanKind::Alternative => "alternative",
        }
    }
}

/// Lifecycle of a scan. Everything except `Pending` is terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanState {
    Pending,
    Succeeded { medicines: Vec<Medicine> },
    Failed { reason: String },
    Cancelled,
}

impl ScanState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ScanState::Pending)
    }

    /// Label used for logs and the outcome metric.
    pub fn label(&self) -> &'static str {
        match self {
            ScanState::Pending => "pending",
            ScanState::Succeeded { .. } => "succeeded",
            ScanState::Failed { .. } => "failed",
            ScanState::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanStatus {
    pub id: String,
    pub kind: ScanKind,
    pub input: String,
    /// Unix seconds.
    pub started_at: i64,
    #[serde(flatten)]
    pub state: ScanState,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    pub kind: ScanKind,
    pub input: String,
}

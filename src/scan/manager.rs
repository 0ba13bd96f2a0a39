//! Simulated voice, camera and alternative-finder lookups.
//!
//! Each scan runs as its own tokio task. It waits for the configured device
//! delay, then resolves its input against the catalog. The task races a
//! timeout and a cancellation token; whichever finishes first decides the
//! terminal state, and later outcomes for the same scan are dropped.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::catalog_store::{CatalogStore, Medicine, DEFAULT_QUERY_LIMIT};
use crate::server::metrics::record_scan_outcome;

use super::models::{ScanKind, ScanState, ScanStatus};

/// Finished scans kept around for polling before the oldest are dropped.
const MAX_FINISHED_SCANS: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Scan input is empty")]
    EmptyInput,
    #[error("Scan not found: {0}")]
    NotFound(String),
    #[error("No medicines matched '{0}'")]
    NoMatch(String),
    #[error("Scan timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSettings {
    /// How long the simulated device takes before it produces a reading.
    pub delay: Duration,
    /// Upper bound on a whole scan, delay included.
    pub timeout: Duration,
}

impl Default for ScanSettings {
    fn default() -> Self {
        ScanSettings {
            delay: Duration::from_millis(1500),
            timeout: Duration::from_millis(5000),
        }
    }
}

struct ScanEntry {
    status: ScanStatus,
    cancel: CancellationToken,
}

pub struct ScanManager {
    catalog: Arc<dyn CatalogStore>,
    settings: ScanSettings,
    scans: Mutex<HashMap<String, ScanEntry>>,
}

/// Resolve a device reading against the catalog.
pub fn resolve(
    catalog: &dyn CatalogStore,
    kind: ScanKind,
    input: &str,
) -> Result<Vec<Medicine>, ScanError> {
    let medicines = match kind {
        ScanKind::Voice | ScanKind::Camera => catalog.recommend(input, DEFAULT_QUERY_LIMIT),
        ScanKind::Alternative => {
            // Exact name first, then the best partial match.
            let source = match catalog.find_medicine_by_name(input) {
                Ok(medicine) => medicine.clone(),
                Err(_) => catalog
                    .recommend(input, 1)
                    .into_iter()
                    .next()
                    .ok_or_else(|| ScanError::NoMatch(input.to_string()))?,
            };
            catalog
                .alternatives(&source.id, DEFAULT_QUERY_LIMIT)
                .map_err(|_| ScanError::NoMatch(input.to_string()))?
        }
    };

    if medicines.is_empty() {
        return Err(ScanError::NoMatch(input.to_string()));
    }
    Ok(medicines)
}

impl ScanManager {
    pub fn new(catalog: Arc<dyn CatalogStore>, settings: ScanSettings) -> Self {
        ScanManager {
            catalog,
            settings,
            scans: Mutex::new(HashMap::new()),
        }
    }

    pub fn settings(&self) -> ScanSettings {
        self.settings
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, ScanEntry>> {
        self.scans
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Start a scan and return its pending status. The outcome is polled
    /// with [`ScanManager::status`].
    pub fn start(self: &Arc<Self>, kind: ScanKind, input: &str) -> Result<ScanStatus, ScanError> {
        let input = input.trim().to_string();
        if input.is_empty() {
            return Err(ScanError::EmptyInput);
        }

        let status = ScanStatus {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            input: input.clone(),
            started_at: chrono::Utc::now().timestamp(),
            state: ScanState::Pending,
        };
        let cancel = CancellationToken::new();

        {
            let mut scans = self.lock();
            prune_finished(&mut scans);
            scans.insert(
                status.id.clone(),
                ScanEntry {
                    status: status.clone(),
                    cancel: cancel.clone(),
                },
            );
        }
        info!("Started {} scan {} for '{}'", kind.as_str(), status.id, input);

        let manager = Arc::clone(self);
        let id = status.id.clone();
        tokio::spawn(async move {
            let settings = manager.settings;
            let catalog = manager.catalog.clone();
            let lookup = async {
                tokio::time::sleep(settings.delay).await;
                resolve(catalog.as_ref(), kind, &input)
            };

            let state = tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Scan {} task observed cancellation", id);
                    return;
                }
                outcome = tokio::time::timeout(settings.timeout, lookup) => match outcome {
                    Ok(Ok(medicines)) => ScanState::Succeeded { medicines },
                    Ok(Err(err)) => ScanState::Failed { reason: err.to_string() },
                    Err(_) => {
                        warn!("Scan {} timed out", id);
                        ScanState::Failed {
                            reason: ScanError::Timeout(settings.timeout).to_string(),
                        }
                    }
                },
            };
            manager.finish(&id, state);
        });

        Ok(status)
    }

    /// Move a pending scan to `state`. Scans already terminal are left alone.
    fn finish(&self, id: &str, state: ScanState) -> bool {
        let mut scans = self.lock();
        let Some(entry) = scans.get_mut(id) else {
            return false;
        };
        if entry.status.state.is_terminal() {
            return false;
        }
        info!("Scan {} {}", id, state.label());
        record_scan_outcome(entry.status.kind.as_str(), state.label());
        entry.status.state = state;
        true
    }

    pub fn status(&self, id: &str) -> Result<ScanStatus, ScanError> {
        self.lock()
            .get(id)
            .map(|entry| entry.status.clone())
            .ok_or_else(|| ScanError::NotFound(id.to_string()))
    }

    /// Cancel a pending scan. Cancelling a finished scan returns its final
    /// status unchanged.
    pub fn cancel(&self, id: &str) -> Result<ScanStatus, ScanError> {
        let mut scans = self.lock();
        let entry = scans
            .get_mut(id)
            .ok_or_else(|| ScanError::NotFound(id.to_string()))?;
        if !entry.status.state.is_terminal() {
            entry.cancel.cancel();
            entry.status.state = ScanState::Cancelled;
            record_scan_outcome(entry.status.kind.as_str(), ScanState::Cancelled.label());
            info!("Scan {} cancelled", id);
        }
        Ok(entry.status.clone())
    }

    /// Cancel every pending scan, used on shutdown.
    pub fn cancel_all(&self) {
        let mut scans = self.lock();
        for entry in scans.values_mut() {
            if !entry.status.state.is_terminal() {
                entry.cancel.cancel();
                entry.status.state = ScanState::Cancelled;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

fn prune_finished(scans: &mut HashMap<String, ScanEntry>) {
    let mut finished: Vec<(i64, String)> = scans
        .values()
        .filter(|entry| entry.status.state.is_terminal())
        .map(|entry| (entry.status.started_at, entry.status.id.clone()))
        .collect();
    if finished.len() < MAX_FINISHED_SCANS {
        return;
    }
    finished.sort();
    let excess = finished.len() + 1 - MAX_FINISHED_SCANS;
    for (_, id) in finished.into_iter().take(excess) {
        scans.remove(&id);
    }
    debug!("Pruned {} finished scans", excess);
}

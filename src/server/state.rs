use axum::extract::FromRef;

use crate::booking::BookingDesk;
use crate::catalog_store::CatalogStore;
use crate::notifications::NotificationStore;
use crate::reminders::ReminderStore;
use crate::scan::{ScanManager, ScanSettings};
use crate::search::SearchVault;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedCatalogStore = Arc<dyn CatalogStore>;
pub type GuardedSearchVault = Arc<dyn SearchVault>;
pub type GuardedNotificationStore = Arc<NotificationStore>;
pub type GuardedReminderStore = Arc<ReminderStore>;
pub type GuardedBookingDesk = Arc<BookingDesk>;
pub type GuardedScanManager = Arc<ScanManager>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog_store: GuardedCatalogStore,
    pub search_vault: GuardedSearchVault,
    pub notifications: GuardedNotificationStore,
    pub reminders: GuardedReminderStore,
    pub booking_desk: GuardedBookingDesk,
    pub scan_manager: GuardedScanManager,
}

impl ServerState {
    /// Wire the per-session services around a shared catalog and notification store.
    pub fn new(
        config: ServerConfig,
        catalog_store: GuardedCatalogStore,
        search_vault: GuardedSearchVault,
        notifications: GuardedNotificationStore,
        reminders: GuardedReminderStore,
        scan_settings: ScanSettings,
    ) -> Self {
        let booking_desk = Arc::new(BookingDesk::new(
            catalog_store.clone(),
            notifications.clone(),
        ));
        let scan_manager = Arc::new(ScanManager::new(catalog_store.clone(), scan_settings));
        ServerState {
            config,
            start_time: Instant::now(),
            catalog_store,
            search_vault,
            notifications,
            reminders,
            booking_desk,
            scan_manager,
        }
    }
}

impl FromRef<ServerState> for GuardedCatalogStore {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog_store.clone()
    }
}

impl FromRef<ServerState> for GuardedSearchVault {
    fn from_ref(input: &ServerState) -> Self {
        input.search_vault.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}

impl FromRef<ServerState> for GuardedNotificationStore {
    fn from_ref(input: &ServerState) -> Self {
        input.notifications.clone()
    }
}

impl FromRef<ServerState> for GuardedReminderStore {
    fn from_ref(input: &ServerState) -> Self {
        input.reminders.clone()
    }
}

impl FromRef<ServerState> for GuardedBookingDesk {
    fn from_ref(input: &ServerState) -> Self {
        input.booking_desk.clone()
    }
}

impl FromRef<ServerState> for GuardedScanManager {
    fn from_ref(input: &ServerState) -> Self {
        input.scan_manager.clone()
    }
}

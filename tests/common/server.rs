//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own session state: a fresh
//! sample catalog, seeded notifications and reminders.

use super::constants::*;
use pharmacy_catalog_server::catalog_store::StaticCatalogStore;
use pharmacy_catalog_server::notifications::NotificationStore;
use pharmacy_catalog_server::reminders::ReminderStore;
use pharmacy_catalog_server::scan::ScanSettings;
use pharmacy_catalog_server::search::SubstringSearchVault;
use pharmacy_catalog_server::server::state::{GuardedCatalogStore, ServerState};
use pharmacy_catalog_server::server::{server::make_app, RequestsLoggingLevel, ServerConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Test server instance with isolated state
///
/// When dropped, the server gracefully shuts down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    #[allow(dead_code)]
    pub port: u16,

    /// Notification store shared with the server, for direct inspection
    #[allow(dead_code)]
    pub notifications: Arc<NotificationStore>,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port with short scan timings
    pub async fn spawn() -> Self {
        Self::spawn_with_scan_settings(ScanSettings {
            delay: Duration::from_millis(SCAN_DELAY_MS),
            timeout: Duration::from_millis(SCAN_TIMEOUT_MS),
        })
        .await
    }

    /// Spawns a new test server with custom scan timings
    ///
    /// # Panics
    ///
    /// Panics if port binding fails or the server doesn't become ready
    /// within the timeout.
    pub async fn spawn_with_scan_settings(scan_settings: ScanSettings) -> Self {
        let catalog_store: GuardedCatalogStore = Arc::new(StaticCatalogStore::sample());
        let notifications = Arc::new(NotificationStore::seeded());

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            content_cache_age_sec: 0, // Disable caching in tests
            frontend_dir_path: None,
        };

        let state = ServerState::new(
            config,
            catalog_store.clone(),
            Arc::new(SubstringSearchVault::new(catalog_store)),
            notifications.clone(),
            Arc::new(ReminderStore::seeded()),
            scan_settings,
        );

        let app = make_app(state).expect("Failed to build app");

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            notifications,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the home endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

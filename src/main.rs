use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pharmacy_catalog_server::config::{AppConfig, CliConfig, FileConfig};
use pharmacy_catalog_server::reminders::ReminderStore;
use pharmacy_catalog_server::server::state::{GuardedCatalogStore, ServerState};
use pharmacy_catalog_server::{
    run_server, CatalogStore, NotificationStore, RequestsLoggingLevel, StaticCatalogStore,
    SubstringSearchVault,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Values in it override the flags below.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// The maximum age of catalog responses in the cache in seconds.
    #[clap(long, default_value_t = 3600)]
    pub content_cache_age_sec: usize,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// How long a simulated voice/camera scan takes, in milliseconds.
    #[clap(long, default_value_t = 1500)]
    pub scan_delay_ms: u64,

    /// Upper bound on a simulated scan, in milliseconds.
    #[clap(long, default_value_t = 5000)]
    pub scan_timeout_ms: u64,

    /// Start with an empty notification list instead of the sample one.
    #[clap(long)]
    pub no_seed_notifications: bool,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            port: self.port,
            metrics_port: self.metrics_port,
            logging_level: self.logging_level.clone(),
            content_cache_age_sec: self.content_cache_age_sec,
            frontend_dir_path: self.frontend_dir_path.clone(),
            scan_delay_ms: self.scan_delay_ms,
            scan_timeout_ms: self.scan_timeout_ms,
            no_seed_notifications: self.no_seed_notifications,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let catalog_store: GuardedCatalogStore = Arc::new(StaticCatalogStore::sample());
    info!(
        "Catalog loaded: {} medicines, {} pharmacies, {} physicians",
        catalog_store.get_medicines_count(),
        catalog_store.get_pharmacies_count(),
        catalog_store.get_physicians_count()
    );

    let notifications = if config.seed_notifications {
        NotificationStore::seeded()
    } else {
        NotificationStore::new()
    };

    let state = ServerState::new(
        config.server_config(),
        catalog_store.clone(),
        Arc::new(SubstringSearchVault::new(catalog_store)),
        Arc::new(notifications),
        Arc::new(ReminderStore::seeded()),
        config.scan,
    );

    info!("Ready to serve at port {}!", config.port);
    run_server(state, config.metrics_port, config.reminder_dispatch_interval).await
}

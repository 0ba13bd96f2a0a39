mod file_config;

pub use file_config::{FileConfig, RemindersConfig, ScanConfig};

use crate::scan::ScanSettings;
use crate::server::{RequestsLoggingLevel, ServerConfig};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::time::Duration;

const DEFAULT_REMINDER_DISPATCH_INTERVAL_SECS: u64 = 20;
const MAX_REMINDER_DISPATCH_INTERVAL_SECS: u64 = 30;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    pub scan_delay_ms: u64,
    pub scan_timeout_ms: u64,
    pub no_seed_notifications: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Core settings
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    pub seed_notifications: bool,

    // Feature configs (with defaults)
    pub scan: ScanSettings,
    pub reminder_dispatch_interval: Duration,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);
        if port != 0 && port == metrics_port {
            bail!("port and metrics_port must differ (both are {})", port);
        }

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let content_cache_age_sec = file
            .content_cache_age_sec
            .unwrap_or(cli.content_cache_age_sec);
        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());
        let seed_notifications = file
            .seed_notifications
            .unwrap_or(!cli.no_seed_notifications);

        let scan_file = file.scan.unwrap_or_default();
        let scan = ScanSettings {
            delay: Duration::from_millis(scan_file.delay_ms.unwrap_or(cli.scan_delay_ms)),
            timeout: Duration::from_millis(scan_file.timeout_ms.unwrap_or(cli.scan_timeout_ms)),
        };
        if scan.timeout.is_zero() {
            bail!("Scan timeout must be greater than zero");
        }

        let reminders_file = file.reminders.unwrap_or_default();
        let dispatch_interval_secs = reminders_file
            .dispatch_interval_secs
            .unwrap_or(DEFAULT_REMINDER_DISPATCH_INTERVAL_SECS);
        // Late ticks drift; at most 30 s apart still lands one in every minute.
        if dispatch_interval_secs == 0
            || dispatch_interval_secs > MAX_REMINDER_DISPATCH_INTERVAL_SECS
        {
            bail!(
                "reminders.dispatch_interval_secs must be between 1 and {}, got {}",
                MAX_REMINDER_DISPATCH_INTERVAL_SECS,
                dispatch_interval_secs
            );
        }

        Ok(Self {
            port,
            metrics_port,
            logging_level,
            content_cache_age_sec,
            frontend_dir_path,
            seed_notifications,
            scan,
            reminder_dispatch_interval: Duration::from_secs(dispatch_interval_secs),
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            port: self.port,
            content_cache_age_sec: self.content_cache_age_sec,
            frontend_dir_path: self.frontend_dir_path.clone(),
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli() -> CliConfig {
        CliConfig {
            port: 3001,
            metrics_port: 9091,
            logging_level: RequestsLoggingLevel::Path,
            content_cache_age_sec: 3600,
            frontend_dir_path: None,
            scan_delay_ms: 1500,
            scan_timeout_ms: 5000,
            no_seed_notifications: false,
        }
    }

    #[test]
    fn test_parse_logging_level() {
        assert!(matches!(
            parse_logging_level("none"),
            Some(RequestsLoggingLevel::None)
        ));
        assert!(matches!(
            parse_logging_level("headers"),
            Some(RequestsLoggingLevel::Headers)
        ));
        // Case insensitive
        assert!(matches!(
            parse_logging_level("BODY"),
            Some(RequestsLoggingLevel::Body)
        ));
        assert!(parse_logging_level("verbose").is_none());
    }

    #[test]
    fn test_resolve_cli_only() {
        let cli = CliConfig {
            frontend_dir_path: Some("/frontend".to_string()),
            no_seed_notifications: true,
            ..cli()
        };

        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(config.port, 3001);
        assert_eq!(config.metrics_port, 9091);
        assert_eq!(config.logging_level, RequestsLoggingLevel::Path);
        assert_eq!(config.content_cache_age_sec, 3600);
        assert_eq!(config.frontend_dir_path, Some("/frontend".to_string()));
        assert!(!config.seed_notifications);
        assert_eq!(config.scan.delay, Duration::from_millis(1500));
        assert_eq!(config.scan.timeout, Duration::from_millis(5000));
        assert_eq!(config.reminder_dispatch_interval, Duration::from_secs(20));
    }

    #[test]
    fn test_resolve_toml_overrides_cli() {
        let file_config = FileConfig {
            port: Some(4000),
            logging_level: Some("body".to_string()),
            seed_notifications: Some(false),
            scan: Some(ScanConfig {
                delay_ms: Some(0),
                timeout_ms: None,
            }),
            reminders: Some(RemindersConfig {
                dispatch_interval_secs: Some(30),
            }),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli(), Some(file_config)).unwrap();

        // TOML values should override CLI
        assert_eq!(config.port, 4000);
        assert_eq!(config.logging_level, RequestsLoggingLevel::Body);
        assert!(!config.seed_notifications);
        assert_eq!(config.scan.delay, Duration::ZERO);
        assert_eq!(config.reminder_dispatch_interval, Duration::from_secs(30));
        // CLI value used when TOML doesn't specify
        assert_eq!(config.metrics_port, 9091);
        assert_eq!(config.scan.timeout, Duration::from_millis(5000));
    }

    #[test]
    fn test_resolve_invalid_logging_level_falls_back_to_cli() {
        let file_config = FileConfig {
            logging_level: Some("loud".to_string()),
            ..Default::default()
        };
        let config = AppConfig::resolve(&cli(), Some(file_config)).unwrap();
        assert_eq!(config.logging_level, RequestsLoggingLevel::Path);
    }

    #[test]
    fn test_resolve_rejects_same_ports() {
        let cli = CliConfig {
            metrics_port: 3001,
            ..cli()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.unwrap_err().to_string().contains("must differ"));
    }

    #[test]
    fn test_resolve_rejects_zero_scan_timeout() {
        let cli = CliConfig {
            scan_timeout_ms: 0,
            ..cli()
        };
        assert!(AppConfig::resolve(&cli, None).is_err());
    }

    #[test]
    fn test_resolve_rejects_bad_dispatch_interval() {
        let file_config = FileConfig {
            reminders: Some(RemindersConfig {
                dispatch_interval_secs: Some(90),
            }),
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli(), Some(file_config));
        assert!(result.unwrap_err().to_string().contains("between 1 and 30"));
    }

    #[test]
    fn test_resolve_rejects_dispatch_interval_that_can_skip_a_minute() {
        let interval = |secs| FileConfig {
            reminders: Some(RemindersConfig {
                dispatch_interval_secs: Some(secs),
            }),
            ..Default::default()
        };
        // A late tick at hh:mm:59 followed by one 60 s later would never see hh:mm+1.
        for secs in [0, 31, 60] {
            assert!(AppConfig::resolve(&cli(), Some(interval(secs))).is_err());
        }
        let config = AppConfig::resolve(&cli(), Some(interval(1))).unwrap();
        assert_eq!(config.reminder_dispatch_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_server_config_subset() {
        let config = AppConfig::resolve(&cli(), None).unwrap();
        let server_config = config.server_config();
        assert_eq!(server_config.port, 3001);
        assert_eq!(server_config.content_cache_age_sec, 3600);
    }
}

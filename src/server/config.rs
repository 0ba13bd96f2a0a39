use super::RequestsLoggingLevel;

/// The part of the resolved configuration the router needs.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    /// `max-age` for catalog responses. Zero still sends the header.
    pub content_cache_age_sec: usize,
    /// When set, static files from here replace the JSON home route.
    pub frontend_dir_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::default(),
            port: 3001,
            content_cache_age_sec: 3600,
            frontend_dir_path: None,
        }
    }
}

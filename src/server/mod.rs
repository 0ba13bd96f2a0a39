mod booking_routes;
pub mod config;
pub mod error;
mod http_layers;
pub mod metrics;
mod notification_routes;
mod plan_routes;
mod reminder_routes;
mod scan_routes;
mod search;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::*;
pub(self) use search::make_search_routes;
pub use server::run_server;

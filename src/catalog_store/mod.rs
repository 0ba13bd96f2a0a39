mod error;
mod models;
mod queries;
mod seed;
mod store;
mod trait_def;

pub use error::{CatalogError, EntityKind};
pub use models::*;
pub use queries::DEFAULT_QUERY_LIMIT;
pub use seed::TIME_SLOTS;
pub use store::StaticCatalogStore;
pub use trait_def::CatalogStore;

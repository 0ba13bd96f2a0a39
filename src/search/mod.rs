mod resolve;
mod search_vault;

pub use resolve::{resolve_all, resolve_to_result, ResolvedSearchResult};
pub use search_vault::*;

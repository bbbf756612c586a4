use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::storage::KeyValueStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Per-user records. Default: MemoryStore. Redis when REDIS_URL is set.
    pub store: Arc<dyn KeyValueStore>,
    /// Read-only opportunity, skill and people data.
    pub catalog: Arc<Catalog>,
    pub config: Config,
}

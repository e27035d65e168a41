use std::sync::Arc;

use catalog_entry_core::registry::CatalogRegistry;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The process-wide catalog registry. Handlers hold the lock for the
    /// whole of a mutation, so each request applies atomically.
    pub registry: Arc<RwLock<CatalogRegistry>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(registry: CatalogRegistry, config: ServerConfig) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            config: Arc::new(config),
        }
    }
}

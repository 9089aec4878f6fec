//! Shared State
//!
//! Handlers reach the upstream through `AppState`, so tests can swap in a
//! fake `Catalog`.

use std::sync::Arc;

use crate::config::Config;
use crate::error::ServerError;
use crate::upstream::{Catalog, CatalogClient};

/// Shared across all handlers
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Arc<Self>, ServerError> {
        let catalog = CatalogClient::new(config)?;
        Ok(Self::with_catalog(Arc::new(catalog)))
    }

    pub fn with_catalog(catalog: Arc<dyn Catalog>) -> Arc<Self> {
        Arc::new(Self { catalog })
    }
}

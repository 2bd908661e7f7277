//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::config::MarketplaceConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the catalog store. The store is owned here - by the
/// composition root's single `AppState` - and handlers only ever see it
/// through the `CatalogStore` trait.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: MarketplaceConfig,
    catalog: Arc<dyn CatalogStore>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: MarketplaceConfig, catalog: Arc<dyn CatalogStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the marketplace configuration.
    #[must_use]
    pub fn config(&self) -> &MarketplaceConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogStore {
        self.inner.catalog.as_ref()
    }
}

//! Application state shared across handlers.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::instrument;

use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::store::Storefront;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the configuration, the catalog client, and the storefront container.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    storefront: Storefront,
}

impl AppState {
    /// Create a new application state with a loading catalog and empty cart.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = CatalogClient::new(config.catalog_url.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                storefront: Storefront::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog client.
    #[must_use]
    pub fn catalog_client(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the storefront container.
    #[must_use]
    pub fn storefront(&self) -> &Storefront {
        &self.inner.storefront
    }

    /// Fetch the catalog in a background task.
    ///
    /// The server can start serving immediately; pages show the loading
    /// state until the fetch settles.
    #[must_use = "the handle can be awaited or aborted"]
    pub fn start_catalog_load(&self) -> JoinHandle<()> {
        let state = self.clone();
        tokio::spawn(async move { state.load_catalog().await })
    }

    /// Fetch the catalog and record the outcome.
    #[instrument(skip(self))]
    pub async fn load_catalog(&self) {
        let result = self.catalog_client().fetch_products().await;

        match &result {
            Ok(products) => tracing::info!(count = products.len(), "Catalog loaded"),
            Err(e) => tracing::error!(error = %e, "Catalog load failed"),
        }

        if !self.storefront().settle_catalog(result) {
            tracing::warn!("Catalog already settled, ignoring fetch result");
        }
    }
}

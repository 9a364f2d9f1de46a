//! Product catalog loading.
//!
//! The catalog is fetched once from a remote endpoint returning a JSON array
//! of products. Until that request settles, the rest of the storefront sees
//! [`CatalogState::Loading`]. The transition to [`CatalogState::Ready`] or
//! [`CatalogState::Failed`] happens exactly once and is never retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use fakestore_storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(config.catalog_url.clone());
//! let products = client.fetch_products().await?;
//! ```

mod client;

use std::sync::Arc;

use fakestore_core::{Product, ProductId};
use thiserror::Error;

pub use client::CatalogClient;

/// Errors that can occur while fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog endpoint answered with a non-success status.
    #[error("Catalog returned HTTP {0}")]
    Status(u16),

    /// Response body was not a JSON array of products.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load state of the product catalog.
///
/// Cloning is cheap: ready products are shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    /// Request in flight, no data yet.
    #[default]
    Loading,
    /// Request failed or the response was rejected.
    Failed,
    /// Products available, in the order the catalog returned them.
    Ready(Arc<[Product]>),
}

impl CatalogState {
    /// Whether the catalog has loaded successfully.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Whether the catalog is still waiting on its request.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded products, if any.
    #[must_use]
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            Self::Ready(products) => Some(products.as_ref()),
            Self::Loading | Self::Failed => None,
        }
    }

    /// Look up a loaded product by ID.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products()?.iter().find(|product| product.id == id)
    }
}

impl From<Result<Vec<Product>, CatalogError>> for CatalogState {
    fn from(result: Result<Vec<Product>, CatalogError>) -> Self {
        result.map_or(Self::Failed, |products| Self::Ready(products.into()))
    }
}

#[cfg(test)]
mod tests {
    use fakestore_core::Price;

    use super::*;

    fn product(id: u32) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::from_cents(999),
            description: String::new(),
            category: "electronics".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_default_is_loading() {
        let state = CatalogState::default();
        assert!(state.is_loading());
        assert!(!state.is_ready());
        assert!(state.products().is_none());
    }

    #[test]
    fn test_ready_lookup() {
        let state = CatalogState::from(Ok(vec![product(1), product(2)]));
        assert!(state.is_ready());
        assert_eq!(state.products().map(<[Product]>::len), Some(2));
        assert_eq!(
            state.product(ProductId::new(2)).map(|p| p.title.as_str()),
            Some("Product 2")
        );
        assert!(state.product(ProductId::new(3)).is_none());
    }

    #[test]
    fn test_error_becomes_failed() {
        let state = CatalogState::from(Err(CatalogError::Status(500)));
        assert!(matches!(state, CatalogState::Failed));
        assert!(state.product(ProductId::new(1)).is_none());
    }

    #[test]
    fn test_catalog_error_display() {
        assert_eq!(
            CatalogError::Status(503).to_string(),
            "Catalog returned HTTP 503"
        );
    }
}

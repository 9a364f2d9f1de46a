//! Storefront state container: catalog state plus the shopping cart.
//!
//! The cart is held as an immutable [`Cart`] snapshot. Every mutation builds
//! a new cart from the current one with the pure transitions in
//! `fakestore_core` and swaps it in with compare-and-swap, so readers never
//! block and never see a half-applied update.

use std::sync::Arc;

use arc_swap::{ArcSwap, Guard};
use fakestore_core::{Cart, Product, ProductId};
use thiserror::Error;
use tokio::sync::watch;

use crate::catalog::{CatalogError, CatalogState};

/// Errors from cart entry points that need the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Catalog request still in flight.
    #[error("Catalog is still loading")]
    CatalogLoading,

    /// Catalog request failed, so there is nothing to add.
    #[error("Catalog is unavailable")]
    CatalogUnavailable,

    /// No product with this ID in the loaded catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// Catalog state and cart for one storefront.
#[derive(Debug)]
pub struct Storefront {
    catalog: watch::Sender<CatalogState>,
    cart: ArcSwap<Cart>,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}

impl Storefront {
    /// Create a storefront with a loading catalog and an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: watch::Sender::new(CatalogState::Loading),
            cart: ArcSwap::from_pointee(Cart::new()),
        }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Snapshot of the catalog state.
    #[must_use]
    pub fn catalog(&self) -> CatalogState {
        self.catalog.borrow().clone()
    }

    /// Record the outcome of the catalog fetch.
    ///
    /// Only the first call has an effect. Returns `true` if the state changed.
    pub fn settle_catalog(&self, result: Result<Vec<Product>, CatalogError>) -> bool {
        self.catalog.send_if_modified(|state| {
            if !state.is_loading() {
                return false;
            }
            *state = CatalogState::from(result);
            true
        })
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Snapshot of the current cart.
    #[must_use]
    pub fn cart(&self) -> Arc<Cart> {
        self.cart.load_full()
    }

    /// Total quantity across the current cart.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.cart.load().total_items()
    }

    /// Add one unit of the product with `id`, returning the new cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog has not loaded or does not contain
    /// the product.
    pub fn add_to_cart(&self, id: ProductId) -> Result<Arc<Cart>, StoreError> {
        let catalog = self.catalog();
        let product = match &catalog {
            CatalogState::Loading => return Err(StoreError::CatalogLoading),
            CatalogState::Failed => return Err(StoreError::CatalogUnavailable),
            CatalogState::Ready(_) => catalog
                .product(id)
                .ok_or(StoreError::UnknownProduct(id))?,
        };

        Ok(self.update_cart(|cart| cart.add_to_cart(product)))
    }

    /// Remove one unit of the product with `id`, returning the new cart.
    ///
    /// Removing a product that is not in the cart leaves it unchanged.
    pub fn remove_from_cart(&self, id: ProductId) -> Arc<Cart> {
        self.update_cart(|cart| cart.remove_from_cart(id))
    }

    /// Replace the cart with `transition(current)`, retrying if another
    /// writer swapped it first.
    fn update_cart(&self, transition: impl Fn(&Cart) -> Cart) -> Arc<Cart> {
        let mut current = self.cart.load_full();
        loop {
            let next = Arc::new(transition(&current));
            let previous = self.cart.compare_and_swap(&current, Arc::clone(&next));
            if Arc::ptr_eq(&*previous, &current) {
                return next;
            }
            current = Guard::into_inner(previous);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use fakestore_core::Price;

    use super::*;

    fn product(id: u32) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::from_cents(1999),
            description: String::new(),
            category: "jewelery".to_string(),
            image: String::new(),
        }
    }

    fn ready_storefront() -> Storefront {
        let storefront = Storefront::new();
        assert!(storefront.settle_catalog(Ok((1..=6).map(product).collect())));
        storefront
    }

    #[test]
    fn test_new_storefront_is_loading_and_empty() {
        let storefront = Storefront::new();
        assert!(storefront.catalog().is_loading());
        assert!(storefront.cart().is_empty());
        assert_eq!(storefront.total_items(), 0);
    }

    #[test]
    fn test_catalog_settles_once() {
        let storefront = Storefront::new();
        assert!(storefront.settle_catalog(Err(CatalogError::Status(502))));
        assert!(!storefront.settle_catalog(Ok(vec![product(1)])));
        assert!(matches!(storefront.catalog(), CatalogState::Failed));

        let storefront = Storefront::new();
        assert!(storefront.settle_catalog(Ok(vec![product(1)])));
        assert!(!storefront.settle_catalog(Err(CatalogError::Status(502))));
        assert!(storefront.catalog().is_ready());
    }

    #[test]
    fn test_add_requires_loaded_catalog() {
        let storefront = Storefront::new();
        assert_eq!(
            storefront.add_to_cart(ProductId::new(1)).unwrap_err(),
            StoreError::CatalogLoading
        );

        storefront.settle_catalog(Err(CatalogError::Status(500)));
        assert_eq!(
            storefront.add_to_cart(ProductId::new(1)).unwrap_err(),
            StoreError::CatalogUnavailable
        );
        assert!(storefront.cart().is_empty());
    }

    #[test]
    fn test_add_unknown_product() {
        let storefront = ready_storefront();
        assert_eq!(
            storefront.add_to_cart(ProductId::new(42)).unwrap_err(),
            StoreError::UnknownProduct(ProductId::new(42))
        );
    }

    #[test]
    fn test_add_twice_remove_once() {
        let storefront = ready_storefront();
        storefront.add_to_cart(ProductId::new(5)).unwrap();
        storefront.add_to_cart(ProductId::new(5)).unwrap();
        let cart = storefront.remove_from_cart(ProductId::new(5));

        assert_eq!(cart.len(), 1);
        let entry = cart.get(ProductId::new(5)).unwrap();
        assert_eq!(entry.amount(), 1);
        assert_eq!(storefront.total_items(), 1);
    }

    #[test]
    fn test_snapshots_are_not_mutated() {
        let storefront = ready_storefront();
        let before = storefront.add_to_cart(ProductId::new(1)).unwrap();
        let after = storefront.add_to_cart(ProductId::new(1)).unwrap();

        assert_eq!(before.total_items(), 1);
        assert_eq!(after.total_items(), 2);
        assert!(Arc::ptr_eq(&after, &storefront.cart()));
    }

    #[test]
    fn test_remove_works_without_catalog() {
        let storefront = Storefront::new();
        let cart = storefront.remove_from_cart(ProductId::new(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        let storefront = Arc::new(ready_storefront());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let storefront = Arc::clone(&storefront);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        storefront.add_to_cart(ProductId::new(3)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(storefront.total_items(), 800);
        assert_eq!(storefront.cart().len(), 1);
    }
}

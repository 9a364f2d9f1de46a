//! In-memory shopping cart.
//!
//! A [`Cart`] is an ordered list of [`CartEntry`] values, one per distinct
//! product ID, in the order products were first added. Carts are immutable
//! values: [`Cart::add_to_cart`] and [`Cart::remove_from_cart`] borrow the
//! current cart and return a new one, leaving the input untouched.
//!
//! # Example
//!
//! ```rust
//! # use fakestore_core::{Cart, Price, Product, ProductId};
//! let product = Product {
//!     id: ProductId::new(5),
//!     title: "Mens Casual Slim Fit".to_string(),
//!     price: Price::from_cents(1599),
//!     description: String::new(),
//!     category: "men's clothing".to_string(),
//!     image: "https://fakestoreapi.com/img/71YXzeOuslL._AC_UY879_.jpg".to_string(),
//! };
//!
//! let cart = Cart::new()
//!     .add_to_cart(&product)
//!     .add_to_cart(&product)
//!     .remove_from_cart(product.id);
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total_items(), 1);
//! ```

use serde::Serialize;

use crate::types::{Price, Product, ProductId};

/// A product in the cart together with its quantity.
///
/// Serializes as the product's fields with `amount` alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartEntry {
    #[serde(flatten)]
    product: Product,
    /// Always at least 1.
    amount: u32,
}

impl CartEntry {
    fn first(product: &Product) -> Self {
        Self {
            product: product.clone(),
            amount: 1,
        }
    }

    fn incremented(&self) -> Self {
        Self {
            product: self.product.clone(),
            amount: self.amount.saturating_add(1),
        }
    }

    /// `None` when the entry would drop to zero.
    fn decremented(&self) -> Option<Self> {
        (self.amount > 1).then(|| Self {
            product: self.product.clone(),
            amount: self.amount - 1,
        })
    }

    /// The product this entry is for.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// The product ID.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Quantity of this product in the cart.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.amount)
    }
}

/// An ordered cart with at most one entry per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartEntry> {
        self.entries.iter()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for a product.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Add one unit of `product`.
    ///
    /// If the product is already in the cart its amount goes up by one and
    /// its position is kept. Otherwise a new entry with amount 1 is appended.
    #[must_use]
    pub fn add_to_cart(&self, product: &Product) -> Self {
        if self.get(product.id).is_some() {
            let entries = self
                .entries
                .iter()
                .map(|entry| {
                    if entry.id() == product.id {
                        entry.incremented()
                    } else {
                        entry.clone()
                    }
                })
                .collect();
            return Self { entries };
        }

        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend(self.entries.iter().cloned());
        entries.push(CartEntry::first(product));
        Self { entries }
    }

    /// Remove one unit of the product with `id`.
    ///
    /// An entry at amount 1 is dropped from the cart. Removing a product
    /// that is not in the cart returns an identical cart.
    #[must_use]
    pub fn remove_from_cart(&self, id: ProductId) -> Self {
        let entries = self
            .entries
            .iter()
            .filter_map(|entry| {
                if entry.id() == id {
                    entry.decremented()
                } else {
                    Some(entry.clone())
                }
            })
            .collect();
        Self { entries }
    }

    /// Sum of `amount` over all entries.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.entries
            .iter()
            .fold(0_u32, |total, entry| total.saturating_add(entry.amount))
    }

    /// Sum of line totals over all entries.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.entries.iter().map(CartEntry::line_total).sum()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartEntry;
    type IntoIter = std::slice::Iter<'a, CartEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

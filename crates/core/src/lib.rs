//! Fake Store Core - Catalog and cart types.
//!
//! This crate provides the types shared by the storefront and its tests:
//! - [`Product`] - Immutable catalog record fetched from the remote store
//! - [`Cart`] / [`CartEntry`] - In-memory cart and its pure state transitions
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no shared state. Every cart transition takes a cart by reference
//! and returns a new one, so callers can swap snapshots without locking.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs and prices, plus [`Product`]
//! - [`cart`] - [`Cart`] and the add/remove transitions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartEntry};
pub use types::*;

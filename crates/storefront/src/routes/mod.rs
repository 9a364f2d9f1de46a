//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Product grid (loading / error page until the catalog settles)
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (catalog loaded)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart drawer contents
//! POST /cart/add               - Add one unit (returns badge, triggers cart-updated)
//! POST /cart/remove            - Remove one unit (returns drawer contents, triggers cart-updated)
//! GET  /cart/count             - Cart count badge
//!
//! # JSON API
//! GET  /api/products           - Catalog state as JSON
//! GET  /api/cart               - Cart contents, total items and subtotal
//! ```

pub mod api;
pub mod cart;
pub mod health;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// HTMX event fired after every cart mutation.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(api::products))
        .route("/cart", get(api::cart))
}

/// Create the health check routes router.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health))
        .route("/ready", get(health::readiness))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Cart routes
        .nest("/cart", cart_routes())
        // JSON API
        .nest("/api", api_routes())
        // Health checks
        .nest("/health", health_routes())
        .fallback(not_found)
}

/// Fallback for unknown paths.
async fn not_found(uri: axum::http::Uri) -> crate::error::AppError {
    crate::error::AppError::NotFound(uri.path().to_string())
}

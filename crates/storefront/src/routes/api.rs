//! JSON API handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fakestore_core::{Cart, Price};
use serde::Serialize;
use serde_json::json;

use crate::catalog::CatalogState;
use crate::state::AppState;

/// Cart contents with derived totals.
#[derive(Debug, Serialize)]
pub struct CartSummary {
    pub items: Cart,
    pub total_items: u32,
    pub subtotal: Price,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.clone(),
            total_items: cart.total_items(),
            subtotal: cart.subtotal(),
        }
    }
}

/// Catalog products, or the load state if they are not available.
pub async fn products(State(state): State<AppState>) -> Response {
    match state.storefront().catalog() {
        CatalogState::Ready(products) => Json(products.to_vec()).into_response(),
        CatalogState::Loading => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "loading" })),
        )
            .into_response(),
        CatalogState::Failed => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "status": "error", "message": "Something went wrong..." })),
        )
            .into_response(),
    }
}

/// Current cart contents.
pub async fn cart(State(state): State<AppState>) -> Json<CartSummary> {
    let cart = state.storefront().cart();
    Json(CartSummary::from(cart.as_ref()))
}

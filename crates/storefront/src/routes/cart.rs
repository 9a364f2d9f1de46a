//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every mutation responds with an `HX-Trigger: cart-updated` header so the
//! badge and the drawer refresh themselves.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use fakestore_core::{Cart, CartEntry, ProductId};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::routes::CART_UPDATED_EVENT;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub price: String,
    pub amount: u32,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
}

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        let product = entry.product();
        Self {
            id: product.id.as_u32(),
            title: product.title.clone(),
            image: product.image.clone(),
            price: product.price.to_string(),
            amount: entry.amount(),
            line_price: entry.line_total().to_string(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.iter().map(CartItemView::from).collect(),
            subtotal: cart.subtotal().to_string(),
        }
    }
}

/// Add/remove form data.
///
/// `product_id` is optional at the extractor so a missing field is answered
/// with 400 like a malformed one.
#[derive(Debug, Deserialize)]
pub struct CartForm {
    #[serde(default)]
    pub product_id: Option<String>,
}

impl CartForm {
    fn product_id(&self) -> Result<ProductId> {
        let raw = self
            .product_id
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("missing product id".to_string()))?;
        raw.parse()
            .map_err(|_| AppError::BadRequest(format!("invalid product id '{raw}'")))
    }
}

/// Cart drawer contents fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub cart_count: u32,
}

/// Display cart drawer contents.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let cart = state.storefront().cart();
    CartItemsTemplate {
        cart: CartView::from(cart.as_ref()),
    }
}

/// Add one unit of a product to the cart (HTMX).
///
/// Returns the updated cart count badge.
///
/// # Errors
///
/// Returns 400 for a missing or malformed product ID, 404 for an unknown
/// product, and 503 or 502 while the catalog is loading or unavailable.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<CartForm>) -> Result<Response> {
    let id = form.product_id()?;
    let cart = state.storefront().add_to_cart(id)?;

    let id = id.to_string();
    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", id.as_str())]));
    tracing::info!(product_id = %id, total_items = cart.total_items(), "Added to cart");

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
        CartCountTemplate {
            cart_count: cart.total_items(),
        },
    )
        .into_response())
}

/// Remove one unit of a product from the cart (HTMX).
///
/// Returns the updated drawer contents.
///
/// # Errors
///
/// Returns 400 for a missing or malformed product ID.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<CartForm>,
) -> Result<Response> {
    let id = form.product_id()?;
    let cart = state.storefront().remove_from_cart(id);

    let id = id.to_string();
    add_breadcrumb("cart", "Removed from cart", Some(&[("product_id", id.as_str())]));
    tracing::info!(product_id = %id, total_items = cart.total_items(), "Removed from cart");

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
        CartItemsTemplate {
            cart: CartView::from(cart.as_ref()),
        },
    )
        .into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        cart_count: state.storefront().total_items(),
    }
}

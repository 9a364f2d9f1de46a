//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fakestore_core::Product;
use tracing::instrument;

use crate::catalog::CatalogState;
use crate::routes::cart::CartView;
use crate::state::AppState;

/// Seconds between reloads while the catalog is loading.
const LOADING_POLL_SECS: u32 = 1;

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_u32(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
        }
    }
}

/// Product grid with cart button and drawer.
#[derive(Template, WebTemplate)]
#[template(path = "home/index.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductView>,
    pub cart: CartView,
    pub cart_count: u32,
}

/// Shown while the catalog request is in flight.
#[derive(Template, WebTemplate)]
#[template(path = "home/loading.html")]
pub struct LoadingTemplate {
    pub poll_secs: u32,
}

/// Shown when the catalog request failed.
#[derive(Template, WebTemplate)]
#[template(path = "home/error.html")]
pub struct ErrorTemplate {
    pub message: &'static str,
}

/// Display the storefront.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Response {
    match state.storefront().catalog() {
        CatalogState::Loading => LoadingTemplate {
            poll_secs: LOADING_POLL_SECS,
        }
        .into_response(),
        CatalogState::Failed => (
            StatusCode::BAD_GATEWAY,
            ErrorTemplate {
                message: "Something went wrong...",
            },
        )
            .into_response(),
        CatalogState::Ready(products) => {
            let cart = state.storefront().cart();
            HomeTemplate {
                products: products.iter().map(ProductView::from).collect(),
                cart: CartView::from(cart.as_ref()),
                cart_count: cart.total_items(),
            }
            .into_response()
        }
    }
}

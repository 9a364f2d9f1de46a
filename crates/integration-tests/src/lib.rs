//! End-to-end test harness for the Fake Store storefront.
//!
//! Each [`TestContext`] starts two servers on ephemeral ports:
//! - a stub catalog serving a fixed JSON body (or an error status)
//! - the storefront itself, pointed at the stub
//!
//! Tests then talk to the storefront over real HTTP with `reqwest`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fakestore-integration-tests
//! ```

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;

use axum::{Router, http::StatusCode, routing::get};
use fakestore_storefront::{config::StorefrontConfig, state::AppState};
use reqwest::Client;
use url::Url;

/// Catalog body with two products in the Fake Store format.
pub const CATALOG_JSON: &str = r#"[
    {
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use and walks in the forest.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    },
    {
        "id": 5,
        "title": "John Hardy Women's Legends Naga Gold & Silver Dragon Station Chain Bracelet",
        "price": 695,
        "description": "From our Legends Collection.",
        "category": "jewelery",
        "image": "https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg",
        "rating": { "rate": 4.6, "count": 400 }
    }
]"#;

/// What the stub catalog answers with.
#[derive(Debug, Clone, Copy)]
pub enum CatalogStub {
    /// 200 with [`CATALOG_JSON`].
    Products,
    /// The given status with an HTML body.
    Status(StatusCode),
}

/// A running storefront wired to a stub catalog.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    pub state: AppState,
}

impl TestContext {
    /// Start the stub catalog and the storefront, and wait for the catalog
    /// to settle.
    pub async fn start(stub: CatalogStub) -> Self {
        let catalog_router = match stub {
            CatalogStub::Products => Router::new().route("/products", get(|| async { CATALOG_JSON })),
            CatalogStub::Status(status) => Router::new().route(
                "/products",
                get(move || async move { (status, "<html>unavailable</html>") }),
            ),
        };
        let catalog_addr = serve(catalog_router).await;

        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            catalog_url: Url::parse(&format!("http://{catalog_addr}/products")).unwrap(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };

        let state = AppState::new(config);
        state.start_catalog_load().await.unwrap();

        let storefront_addr = serve(fakestore_storefront::app(state.clone())).await;

        Self {
            client: Client::new(),
            base_url: format!("http://{storefront_addr}"),
            state,
        }
    }

    /// Absolute URL for a storefront path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST` a cart form for `product_id` to `/cart/{action}`.
    pub async fn cart_action(&self, action: &str, product_id: u32) -> reqwest::Response {
        self.client
            .post(self.url(&format!("/cart/{action}")))
            .header("content-type", "application/x-www-form-urlencoded")
            .body(format!("product_id={product_id}"))
            .send()
            .await
            .unwrap()
    }

    /// `GET /api/cart` as JSON.
    pub async fn cart_json(&self) -> serde_json::Value {
        let response = self.client.get(self.url("/api/cart")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_str(&response.text().await.unwrap()).unwrap()
    }
}

/// Serve `router` on an ephemeral localhost port.
async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

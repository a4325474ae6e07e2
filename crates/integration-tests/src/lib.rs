//! Integration tests for the receipt processor.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p receipt-processor-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `receipts_api` - HTTP behaviour of the receipt endpoints
//! - `points_rules` - Scoring properties through the public core API
//!
//! Tests drive the real router in-process with `tower::ServiceExt::oneshot`;
//! no ports are bound.

use axum::{
    Router,
    body::{Body, Bytes, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use receipt_processor_server::{config::ServerConfig, state::AppState, store::ReceiptStore};
use serde_json::Value;
use tower::ServiceExt;

/// A router wired to its own empty store.
pub struct TestApp {
    router: Router,
    store: ReceiptStore,
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    /// The body as UTF-8 text.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Build an app with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Build an app with the given configuration.
    #[must_use]
    pub fn with_config(config: ServerConfig) -> Self {
        let store = ReceiptStore::new();
        let router = receipt_processor_server::app(AppState::with_store(config, store.clone()));
        Self { router, store }
    }

    /// The store backing this app.
    #[must_use]
    pub const fn store(&self) -> &ReceiptStore {
        &self.store
    }

    /// Send a request and buffer the response.
    ///
    /// # Panics
    ///
    /// Panics if the router fails or the body cannot be read.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// `POST /receipts/process` with a raw body and optional content type.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn post_raw(&self, body: impl Into<Body>, content_type: Option<&str>) -> TestResponse {
        let mut builder = Request::post("/receipts/process");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        self.send(builder.body(body.into()).expect("valid request"))
            .await
    }

    /// `POST /receipts/process` with a JSON body.
    pub async fn post_receipt(&self, receipt: &Value) -> TestResponse {
        self.post_raw(receipt.to_string(), Some("application/json"))
            .await
    }

    /// Submit a receipt and return its id.
    ///
    /// # Panics
    ///
    /// Panics if the submission is not accepted.
    pub async fn submit(&self, receipt: &Value) -> String {
        let response = self.post_receipt(receipt).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text());
        response.json()["id"]
            .as_str()
            .expect("id is a string")
            .to_string()
    }

    /// `GET /receipts/{id}/points`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn get_points(&self, id: &str) -> TestResponse {
        self.get(&format!("/receipts/{id}/points")).await
    }

    /// `GET` an arbitrary path.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).expect("valid request"))
            .await
    }
}

/// Receipt JSON fixtures.
pub mod fixtures {
    use serde_json::{Value, json};

    /// Scores 28.
    #[must_use]
    pub fn target() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
                {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
                {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
                {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
                {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
            ],
            "total": "35.35"
        })
    }

    /// Scores 109.
    #[must_use]
    pub fn corner_market() -> Value {
        json!({
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"}
            ],
            "total": "9.00"
        })
    }
}

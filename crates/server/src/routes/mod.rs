//! HTTP route handlers for the receipt processor.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//!
//! # Receipts
//! POST /receipts/process       - Submit a receipt, returns {"id": ...}
//! GET  /receipts/{id}/points   - Score a receipt, returns {"points": ...}
//! ```

pub mod receipts;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the receipt routes router.
pub fn receipt_routes() -> Router<AppState> {
    Router::new()
        .route("/process", post(receipts::process_receipt))
        .route("/{id}/points", get(receipts::get_points))
}

/// Create the main router with all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/receipts", receipt_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

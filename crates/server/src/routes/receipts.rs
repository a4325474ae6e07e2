//! Receipt route handlers.
//!
//! Receipts are submitted as JSON, stored in memory under a generated id, and
//! scored on demand when their points are requested.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use receipt_processor_core::{Receipt, ReceiptId, compute_points};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Response for a successfully processed receipt.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: ReceiptId,
}

/// Response carrying a receipt's points.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}

/// Store a submitted receipt and return its id.
///
/// # Errors
///
/// Returns a 400 if the body is not a receipt: malformed JSON, a missing or
/// mistyped field, or a missing `application/json` content type.
#[instrument(skip(state, payload))]
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessReceiptResponse>> {
    let Json(receipt) = payload?;

    let stored = state.receipts().append(receipt).await?;
    tracing::info!(
        receipt_id = %stored.id,
        retailer = %stored.receipt.retailer,
        items = stored.receipt.items.len(),
        "Receipt processed"
    );

    Ok(Json(ProcessReceiptResponse { id: stored.id }))
}

/// Score a stored receipt.
///
/// # Errors
///
/// Returns a 400 if no receipts have been stored, if no receipt has this id,
/// or if one of the receipt's numeric fields cannot be parsed.
#[instrument(skip(state))]
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>> {
    let stored = state.receipts().find_by_raw_id(&id).await?;
    let points = compute_points(&stored.receipt)?;

    tracing::info!(receipt_id = %stored.id, points, "Points computed");

    Ok(Json(PointsResponse { points }))
}

//! Loyalty points rule engine.
//!
//! A receipt's score is the sum of seven independent rules:
//!
//! | Rule | Points |
//! |---|---|
//! | Retailer | 1 per ASCII letter or digit in the retailer name |
//! | Round total | 50 if the total has no cents |
//! | Quarter total | 25 if the total is a multiple of 0.25 |
//! | Item pairs | 5 for every two items |
//! | Descriptions | `ceil(price * 0.2)` per item whose trimmed description length is a multiple of 3 |
//! | Odd day | 6 if the purchase day is odd |
//! | Afternoon | 10 if purchased after 14:00 and before 16:00 |
//!
//! Scoring either succeeds with every rule applied or fails as a whole; there
//! is no partial score.
//!
//! ```
//! use receipt_processor_core::{Item, Receipt, compute_points};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![Item::new("Gatorade", "2.25"); 4],
//!     total: "9.00".to_string(),
//! };
//!
//! assert_eq!(compute_points(&receipt).unwrap(), 109);
//! ```

pub mod rules;

use serde::Serialize;

use crate::types::{Money, MoneyError, Receipt};

/// Errors that abort a points computation.
#[derive(thiserror::Error, Debug)]
pub enum PointsError {
    /// The receipt total is not a decimal amount.
    #[error("invalid total: {0}")]
    InvalidTotal(#[source] MoneyError),

    /// An item price is not a decimal amount.
    #[error("invalid price for item {index}: {source}")]
    InvalidPrice {
        /// Zero-based position of the item on the receipt.
        index: usize,
        #[source]
        source: MoneyError,
    },

    /// An item price is too large to score.
    #[error("price {price:?} for item {index} is out of range")]
    PriceOutOfRange {
        /// Zero-based position of the item on the receipt.
        index: usize,
        /// The submitted price string.
        price: String,
    },

    /// The purchase date has no numeric day field.
    #[error("invalid purchase date {0:?}: expected YYYY-MM-DD")]
    InvalidPurchaseDate(String),

    /// The purchase time is not a clock time.
    #[error("invalid purchase time {0:?}: expected HH:MM")]
    InvalidPurchaseTime(String),

    /// The summed points do not fit in an `i64`.
    #[error("points total is out of range")]
    Overflow,
}

/// Points contributed by each rule, plus their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    /// One point per ASCII letter or digit in the retailer name.
    pub retailer: i64,
    /// 50 if the total is a whole amount.
    pub round_total: i64,
    /// 25 if the total is a multiple of 0.25.
    pub quarter_total: i64,
    /// 5 for every two items.
    pub item_pairs: i64,
    /// `ceil(price * 0.2)` summed over items whose trimmed description length
    /// is a multiple of 3.
    pub descriptions: i64,
    /// 6 if the purchase day is odd.
    pub odd_day: i64,
    /// 10 if the purchase time is strictly between 14:00 and 16:00.
    pub afternoon: i64,
    /// Sum of every rule above.
    pub total: i64,
}

impl PointsBreakdown {
    /// Apply every rule to `receipt`.
    ///
    /// Fields are validated in a fixed order (total, item prices, purchase
    /// date, purchase time) so the same bad receipt always reports the same
    /// error.
    ///
    /// # Errors
    ///
    /// Returns the first [`PointsError`] encountered.
    pub fn compute(receipt: &Receipt) -> Result<Self, PointsError> {
        let total = Money::parse(&receipt.total).map_err(PointsError::InvalidTotal)?;

        let mut breakdown = Self {
            retailer: rules::retailer_points(&receipt.retailer),
            round_total: rules::round_total_points(&total),
            quarter_total: rules::quarter_total_points(&total),
            item_pairs: rules::item_pair_points(receipt.items.len()),
            descriptions: rules::description_points(&receipt.items)?,
            odd_day: rules::odd_day_points(&receipt.purchase_date)?,
            afternoon: rules::afternoon_points(&receipt.purchase_time)?,
            total: 0,
        };

        breakdown.total = [
            breakdown.retailer,
            breakdown.round_total,
            breakdown.quarter_total,
            breakdown.item_pairs,
            breakdown.descriptions,
            breakdown.odd_day,
            breakdown.afternoon,
        ]
        .into_iter()
        .try_fold(0_i64, i64::checked_add)
        .ok_or(PointsError::Overflow)?;

        Ok(breakdown)
    }
}

/// Compute the loyalty points for a receipt.
///
/// # Errors
///
/// Returns a [`PointsError`] naming the first field that could not be parsed.
pub fn compute_points(receipt: &Receipt) -> Result<i64, PointsError> {
    PointsBreakdown::compute(receipt).map(|breakdown| breakdown.total)
}

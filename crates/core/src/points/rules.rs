//! The individual scoring rules.
//!
//! Each rule looks at one part of a receipt and returns its contribution.
//! Rules are independent of each other; [`super::PointsBreakdown`] runs all
//! of them and sums the results.

use rust_decimal::Decimal;

use super::PointsError;
use crate::types::{Item, Money};

/// Points awarded when the total is a round dollar amount.
pub const ROUND_TOTAL_POINTS: i64 = 50;
/// Points awarded when the total is a multiple of 0.25.
pub const QUARTER_TOTAL_POINTS: i64 = 25;
/// Points awarded for every two items.
pub const ITEM_PAIR_POINTS: i64 = 5;
/// Points awarded when the purchase day is odd.
pub const ODD_DAY_POINTS: i64 = 6;
/// Points awarded for purchases strictly between 14:00 and 16:00.
pub const AFTERNOON_POINTS: i64 = 10;

fn count_points(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// One point for every ASCII letter or digit in the retailer name.
#[must_use]
pub fn retailer_points(retailer: &str) -> i64 {
    count_points(
        retailer
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .count(),
    )
}

/// 50 points if the total has no cents.
#[must_use]
pub fn round_total_points(total: &Money) -> i64 {
    if total.is_whole() {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

/// 25 points if the total is a multiple of 0.25.
#[must_use]
pub fn quarter_total_points(total: &Money) -> i64 {
    if total.is_multiple_of(Decimal::new(25, 2)) {
        QUARTER_TOTAL_POINTS
    } else {
        0
    }
}

/// 5 points for every two items.
#[must_use]
pub fn item_pair_points(item_count: usize) -> i64 {
    count_points(item_count / 2).saturating_mul(ITEM_PAIR_POINTS)
}

/// For each item whose trimmed description length is a multiple of 3,
/// `ceil(price * 0.2)` points.
///
/// An empty (or all-whitespace) description has length 0 and qualifies.
/// Length is measured in UTF-8 bytes. Every price is validated, including
/// prices of items that do not qualify.
///
/// # Errors
///
/// Returns [`PointsError::InvalidPrice`] for the first unparseable price,
/// [`PointsError::PriceOutOfRange`] if an item's points do not fit an `i64`,
/// and [`PointsError::Overflow`] if the sum does not.
pub fn description_points(items: &[Item]) -> Result<i64, PointsError> {
    let fifth = Decimal::new(2, 1);
    let mut points: i64 = 0;

    for (index, item) in items.iter().enumerate() {
        let price = Money::parse(&item.price)
            .map_err(|source| PointsError::InvalidPrice { index, source })?;

        if item.short_description.trim().len() % 3 != 0 {
            continue;
        }

        let item_points = price.scaled_ceil(fifth).ok_or_else(|| PointsError::PriceOutOfRange {
            index,
            price: item.price.clone(),
        })?;
        points = points.checked_add(item_points).ok_or(PointsError::Overflow)?;
    }

    Ok(points)
}

/// 6 points if the day of the purchase date is odd.
///
/// The day is the third `-`-separated field of the date.
///
/// # Errors
///
/// Returns [`PointsError::InvalidPurchaseDate`] if there is no third field or
/// it is not an unsigned integer.
pub fn odd_day_points(purchase_date: &str) -> Result<i64, PointsError> {
    let day = purchase_date
        .split('-')
        .nth(2)
        .and_then(|day| day.parse::<u32>().ok())
        .ok_or_else(|| PointsError::InvalidPurchaseDate(purchase_date.to_owned()))?;

    Ok(if day % 2 == 1 { ODD_DAY_POINTS } else { 0 })
}

/// 10 points if the purchase time is after 14:00 and before 16:00.
///
/// The time is read as an integer with its colons removed, so `"14:05"`
/// becomes `1405`. Both bounds are exclusive.
///
/// # Errors
///
/// Returns [`PointsError::InvalidPurchaseTime`] if the digits do not form an
/// integer.
pub fn afternoon_points(purchase_time: &str) -> Result<i64, PointsError> {
    let clock: String = purchase_time.split(':').collect();
    let clock = clock
        .parse::<i64>()
        .map_err(|_| PointsError::InvalidPurchaseTime(purchase_time.to_owned()))?;

    Ok(if (1401..1600).contains(&clock) {
        AFTERNOON_POINTS
    } else {
        0
    })
}

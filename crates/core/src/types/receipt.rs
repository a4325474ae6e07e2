//! Receipt and line item types.
//!
//! These mirror the JSON accepted by `POST /receipts/process`. Numeric and
//! date fields stay as the submitted strings; they are only interpreted when a
//! receipt is scored, so a receipt with an unparseable total can be stored
//! but not scored.

use serde::{Deserialize, Serialize};

/// One line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Product description as printed, possibly padded with whitespace.
    pub short_description: String,
    /// Decimal price string, e.g. `"6.49"`.
    pub price: String,
}

impl Item {
    /// Create an item from a description and price string.
    #[must_use]
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A submitted purchase record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name.
    pub retailer: String,
    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// Purchase time, `HH:MM` on a 24-hour clock.
    pub purchase_time: String,
    /// Items purchased. Order does not affect scoring.
    pub items: Vec<Item>,
    /// Decimal total string, e.g. `"35.35"`.
    pub total: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}],
            "total": "6.49"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items, vec![Item::new("Mountain Dew 12PK", "6.49")]);
        assert_eq!(receipt.total, "6.49");
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [],
            "total": "0.00",
            "id": "client-supplied"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn test_deserialize_requires_fields() {
        let missing_total = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": []
        }"#;
        assert!(serde_json::from_str::<Receipt>(missing_total).is_err());

        let missing_price = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{"shortDescription": "Gum"}],
            "total": "1.00"
        }"#;
        assert!(serde_json::from_str::<Receipt>(missing_price).is_err());
    }

    #[test]
    fn test_serialize_round_trips_field_names() {
        let receipt = Receipt {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            items: vec![Item::new("Pepsi - 12-oz", "1.25")],
            total: "1.25".to_string(),
        };

        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["purchaseDate"], "2022-01-02");
        assert_eq!(value["items"][0]["shortDescription"], "Pepsi - 12-oz");
    }
}

//! Receipt identifiers.
//!
//! Receipts are keyed by random (v4) UUIDs so that identifiers handed out by
//! the server are unguessable and never collide in practice.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error returned when a string is not a valid receipt identifier.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid receipt id: {0:?}")]
pub struct ReceiptIdError(pub String);

/// Identifier assigned to a receipt when it is stored.
///
/// Serializes as the canonical hyphenated lowercase UUID string.
///
/// ```
/// use receipt_processor_core::ReceiptId;
///
/// let id = ReceiptId::generate();
/// let parsed = ReceiptId::parse(&id.to_string()).unwrap();
/// assert_eq!(id, parsed);
///
/// assert!(ReceiptId::parse("not-a-uuid").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its string form.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptIdError`] if the input is not a UUID.
    pub fn parse(s: &str) -> Result<Self, ReceiptIdError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ReceiptIdError(s.to_owned()))
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ReceiptId {
    type Err = ReceiptIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        let a = ReceiptId::generate();
        let b = ReceiptId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_is_hyphenated_lowercase() {
        let id = ReceiptId::parse("7FB1377B-B223-49D9-A31A-5A02701DD310").unwrap();
        assert_eq!(id.to_string(), "7fb1377b-b223-49d9-a31a-5a02701dd310");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = ReceiptId::parse("abc").unwrap_err();
        assert_eq!(err, ReceiptIdError("abc".to_string()));
        assert!(ReceiptId::parse("").is_err());
    }

    #[test]
    fn test_from_str_matches_parse() {
        let raw = "7fb1377b-b223-49d9-a31a-5a02701dd310";
        assert_eq!(raw.parse::<ReceiptId>().unwrap(), ReceiptId::parse(raw).unwrap());
        assert!("abc".parse::<ReceiptId>().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let id = ReceiptId::parse("7fb1377b-b223-49d9-a31a-5a02701dd310").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"7fb1377b-b223-49d9-a31a-5a02701dd310\"");
    }
}

//! In-memory receipt store.
//!
//! Receipts live for the lifetime of the process. They are kept in insertion
//! order with an id index alongside, behind a single async `RwLock`: appends
//! are serialized, lookups run concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use receipt_processor_core::{Receipt, ReceiptId};
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors from receipt store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No receipts have been stored yet.
    #[error("no receipts have been processed yet")]
    Empty,

    /// No receipt has the requested id.
    #[error("no receipt found for id {0}")]
    NotFound(String),

    /// A receipt with this id is already stored.
    #[error("a receipt with id {0} already exists")]
    DuplicateId(ReceiptId),
}

/// A receipt as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    /// Identifier assigned at submission.
    pub id: ReceiptId,
    /// The submitted receipt, never modified.
    pub receipt: Receipt,
    /// When the receipt was accepted.
    pub received_at: DateTime<Utc>,
}

#[derive(Default)]
struct Inner {
    receipts: Vec<Arc<StoredReceipt>>,
    index: HashMap<ReceiptId, usize>,
}

/// Append-only store of submitted receipts.
///
/// Cheaply cloneable; clones share the same receipts.
#[derive(Clone, Default)]
pub struct ReceiptStore {
    inner: Arc<RwLock<Inner>>,
}

impl ReceiptStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a receipt under a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] in the vanishingly unlikely event
    /// that the generated id is already taken.
    pub async fn append(&self, receipt: Receipt) -> Result<Arc<StoredReceipt>, StoreError> {
        self.insert(ReceiptId::generate(), receipt).await
    }

    /// Store a receipt under a caller-chosen id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if `id` is already stored.
    pub async fn insert(
        &self,
        id: ReceiptId,
        receipt: Receipt,
    ) -> Result<Arc<StoredReceipt>, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.index.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }

        let stored = Arc::new(StoredReceipt {
            id,
            receipt,
            received_at: Utc::now(),
        });

        let position = inner.receipts.len();
        inner.receipts.push(Arc::clone(&stored));
        inner.index.insert(id, position);

        Ok(stored)
    }

    /// Look up a receipt by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Empty`] if nothing has been stored yet, and
    /// [`StoreError::NotFound`] if no receipt has this id.
    pub async fn find_by_id(&self, id: &ReceiptId) -> Result<Arc<StoredReceipt>, StoreError> {
        let inner = self.inner.read().await;

        if inner.receipts.is_empty() {
            return Err(StoreError::Empty);
        }

        inner
            .index
            .get(id)
            .and_then(|&position| inner.receipts.get(position))
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Look up a receipt by the raw id string from a request.
    ///
    /// Strings that are not valid ids are reported as not found.
    ///
    /// # Errors
    ///
    /// Same as [`ReceiptStore::find_by_id`].
    pub async fn find_by_raw_id(&self, raw: &str) -> Result<Arc<StoredReceipt>, StoreError> {
        match raw.parse::<ReceiptId>() {
            Ok(id) => self.find_by_id(&id).await,
            Err(_) => {
                if self.is_empty().await {
                    Err(StoreError::Empty)
                } else {
                    Err(StoreError::NotFound(raw.to_owned()))
                }
            }
        }
    }

    /// Number of stored receipts.
    pub async fn len(&self) -> usize {
        self.inner.read().await.receipts.len()
    }

    /// Whether no receipts have been stored.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.receipts.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use receipt_processor_core::Item;

    use super::*;

    fn receipt(retailer: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![Item::new("Gum", "1.00")],
            total: "1.00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_then_find() {
        let store = ReceiptStore::new();
        let stored = store.append(receipt("Target")).await.unwrap();

        let found = store.find_by_id(&stored.id).await.unwrap();
        assert_eq!(found.receipt.retailer, "Target");
        assert_eq!(found.id, stored.id);
    }

    #[tokio::test]
    async fn test_find_on_empty_store() {
        let store = ReceiptStore::new();
        let err = store.find_by_id(&ReceiptId::generate()).await.unwrap_err();
        assert_eq!(err, StoreError::Empty);
    }

    #[tokio::test]
    async fn test_find_unknown_id() {
        let store = ReceiptStore::new();
        store.append(receipt("Target")).await.unwrap();

        let missing = ReceiptId::generate();
        let err = store.find_by_id(&missing).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound(missing.to_string()));
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id() {
        let store = ReceiptStore::new();
        let id = ReceiptId::generate();
        store.insert(id, receipt("First")).await.unwrap();

        let err = store.insert(id, receipt("Second")).await.unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(id));

        let found = store.find_by_id(&id).await.unwrap();
        assert_eq!(found.receipt.retailer, "First");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_by_raw_id() {
        let store = ReceiptStore::new();
        assert_eq!(
            store.find_by_raw_id("garbage").await.unwrap_err(),
            StoreError::Empty
        );

        let stored = store.append(receipt("Target")).await.unwrap();
        let found = store.find_by_raw_id(&stored.id.to_string()).await.unwrap();
        assert_eq!(found.id, stored.id);

        assert_eq!(
            store.find_by_raw_id("garbage").await.unwrap_err(),
            StoreError::NotFound("garbage".to_string())
        );
    }

    #[tokio::test]
    async fn test_clones_share_receipts() {
        let store = ReceiptStore::new();
        let clone = store.clone();
        let stored = clone.append(receipt("Target")).await.unwrap();

        assert!(!store.is_empty().await);
        assert!(store.find_by_id(&stored.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_concurrent_appends() {
        let store = ReceiptStore::new();

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.append(receipt(&format!("Shop {i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }

        assert_eq!(store.len().await, 50);
        for id in ids {
            assert!(store.find_by_id(&id).await.is_ok());
        }
    }
}

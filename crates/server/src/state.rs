//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::ReceiptStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// receipt store and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    receipts: ReceiptStore,
}

impl AppState {
    /// Create a new application state with an empty receipt store.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, ReceiptStore::new())
    }

    /// Create application state around an existing store.
    #[must_use]
    pub fn with_store(config: ServerConfig, receipts: ReceiptStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, receipts }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the receipt store.
    #[must_use]
    pub fn receipts(&self) -> &ReceiptStore {
        &self.inner.receipts
    }
}

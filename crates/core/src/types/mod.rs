//! Core types for the receipt processor.
//!
//! This module provides type-safe wrappers for the receipt domain.

pub mod id;
pub mod money;
pub mod receipt;

pub use id::{ReceiptId, ReceiptIdError};
pub use money::{Money, MoneyError};
pub use receipt::{Item, Receipt};

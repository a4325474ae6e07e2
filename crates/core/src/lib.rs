//! Receipt Processor Core - Receipt types and the points rule engine.
//!
//! This crate provides the domain shared by every receipt processor component:
//! - `server` - HTTP service that stores receipts and scores them on request
//! - `cli` - Command-line tool for scoring receipt files offline
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no global state. Scoring a receipt never touches anything but its input.
//!
//! # Modules
//!
//! - [`types`] - Receipts, items, identifiers, and exact decimal money
//! - [`points`] - The seven additive scoring rules

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod points;
pub mod types;

pub use points::{PointsBreakdown, PointsError, compute_points};
pub use types::*;

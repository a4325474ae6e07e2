//! HTTP middleware stack for the receipt processor.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (add unique ID to each request, recorded on the span)
//! 4. Body limit (reject oversized payloads with 413)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};

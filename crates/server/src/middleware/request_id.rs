//! Request ID middleware for request tracing and correlation.
//!
//! Every response carries an `x-request-id`. An id supplied by an upstream
//! proxy is kept when it is short, printable ASCII; anything else is replaced
//! by a fresh UUID v4 so that log fields and response headers stay bounded.
//! The id is recorded on the request span and tagged on the Sentry scope.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream request id that is echoed back.
pub const MAX_REQUEST_ID_LEN: usize = 128;

/// Pick the id for a request: the upstream one if acceptable, else a new UUID.
fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| is_acceptable_upstream_id(id))
        .map_or_else(|| Uuid::new_v4().to_string(), ToOwned::to_owned)
}

fn is_acceptable_upstream_id(id: &str) -> bool {
    (1..=MAX_REQUEST_ID_LEN).contains(&id.len()) && id.bytes().all(|b| b.is_ascii_graphic())
}

/// Tag the request with an id and echo it on the response.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(request.headers());

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));

    let mut response = next.run(request).await;

    // Both branches of resolve_request_id yield visible ASCII
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

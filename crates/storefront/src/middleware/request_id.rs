//! Request ID middleware.
//!
//! Tags every request with an `x-request-id` so a Sentry event, a log
//! line and a buyer's screenshot of an error page can be matched up.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Attach a request ID to the current request and its response.
///
/// A reverse proxy in front of the storefront may already have assigned
/// one; in that case its value is kept so the IDs line up across hops.
/// Otherwise a fresh UUID v4 is generated. Either way the ID is recorded
/// on the current tracing span, tagged onto the Sentry scope, and echoed
/// back in the response headers.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    Span::current().record("request_id", &request_id);

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

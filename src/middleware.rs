//! Request ID propagation.
//!
//! The App Runner front proxy tags each request with `x-request-id`. That ID
//! is reused when present, a UUID v4 is minted when it is missing, and the
//! chosen value is echoed on the response so platform and client logs can be
//! matched up.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the request ID in both directions
pub const X_REQUEST_ID: &str = "x-request-id";

/// Take the caller's request ID, or mint one if absent or empty.
fn request_id_for(request: &Request) -> Option<HeaderValue> {
    request
        .headers()
        .get(X_REQUEST_ID)
        .filter(|value| !value.is_empty())
        .cloned()
        .or_else(|| HeaderValue::from_str(&Uuid::new_v4().to_string()).ok())
}

/// Middleware that propagates the request ID and scopes a span to it.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = request_id_for(&request);
    if let Some(id) = &request_id {
        request.headers_mut().insert(X_REQUEST_ID, id.clone());
    }

    let span = tracing::debug_span!(
        "request",
        request_id = request_id
            .as_ref()
            .and_then(|id| id.to_str().ok())
            .unwrap_or_default(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    async move {
        let mut response = next.run(request).await;
        tracing::debug!(status = response.status().as_u16(), "Request completed");
        if let Some(id) = request_id {
            response.headers_mut().insert(X_REQUEST_ID, id);
        }
        response
    }
    .instrument(span)
    .await
}

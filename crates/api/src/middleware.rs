use std::time::{Duration, Instant};

use axum::{
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the per-request correlation id (accepted and echoed).
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wrap every request in a tracing span keyed by a request id, and log one
/// line per completed request.
///
/// A valid UUID supplied in `x-request-id` is reused; otherwise a fresh UUIDv7
/// is minted. The id is echoed back on the response.
pub async fn trace_requests(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    let request_id = extract_request_id(req.headers()).unwrap_or_else(Uuid::now_v7);
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let span = tracing::info_span!("http_request", %request_id, %method, %path);
    let started = Instant::now();

    let mut response = next.run(req).instrument(span.clone()).await;

    let status = response.status();
    let latency_ms = elapsed_millis(started.elapsed());
    span.in_scope(|| {
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), latency_ms, "request failed");
        } else if status.is_client_error() {
            tracing::warn!(status = status.as_u16(), latency_ms, "request rejected");
        } else {
            tracing::info!(status = status.as_u16(), latency_ms, "request completed");
        }
    });

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Milliseconds, saturating instead of truncating the `u128`.
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn extract_request_id(headers: &HeaderMap) -> Option<Uuid> {
    let header = headers.get(REQUEST_ID_HEADER)?;
    let value = header.to_str().ok()?;
    Uuid::parse_str(value.trim()).ok()
}

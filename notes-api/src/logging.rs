//! Request logging middleware.
//!
//! One `info` line per request: method, path, status, elapsed time.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

/// Log method, path, status and duration for every request.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms,
        "request"
    );
    response
}

//! Request logging middleware.

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Paths polled by orchestrators; logged at debug to keep access logs quiet.
const HEALTH_PATHS: [&str; 3] = ["/health", "/ready", "/live"];

/// Logs one line per request, with the level chosen by outcome.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();

    if HEALTH_PATHS.contains(&path.as_str()) && status == StatusCode::OK {
        debug!(target: "http", %method, %path, status = status.as_u16(), elapsed_ms, "health check");
    } else if status.is_server_error() {
        error!(target: "http", %method, %path, status = status.as_u16(), elapsed_ms, "request failed");
    } else if status.is_client_error() {
        warn!(target: "http", %method, %path, status = status.as_u16(), elapsed_ms, "request rejected");
    } else {
        info!(target: "http", %method, %path, status = status.as_u16(), elapsed_ms, "request completed");
    }

    response
}

//! Fallback responses for unmatched routes and panicking handlers.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::Response;

use crate::error::{ErrorCode, GENERIC_INTERNAL_MESSAGE, error_response};

/// Respond to any route or method the API does not serve.
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, ErrorCode::NOT_FOUND, "Not found")
}

/// Turn a handler panic into a generic 500 so the server keeps running.
#[allow(clippy::needless_pass_by_value)]
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!(panic = %detail, "Handler panicked");
    metrics::counter!("http_panics_total").increment(1);

    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::INTERNAL_ERROR,
        GENERIC_INTERNAL_MESSAGE,
    )
}

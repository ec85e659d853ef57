//! Health check handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::state::AppState;
use crate::domain::{HealthResponse, ReadyComponents, ReadyResponse};

/// Liveness probe - always returns 200 if the service is running.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness probe - checks if the service can serve requests.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let storage_ok = match state.storage.health_check().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Storage health check failed");
            false
        }
    };

    let status_code = if storage_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = ReadyResponse {
        ready: storage_ok,
        components: ReadyComponents {
            storage: storage_ok,
        },
    };

    (status_code, Json(response))
}

/// Prometheus metrics endpoint.
///
/// Without an installed recorder only the `up` gauge is reported.
pub async fn metrics(State(state): State<AppState>) -> String {
    let mut output = String::new();

    output.push_str("# HELP feedback_api_up Whether the service is up\n");
    output.push_str("# TYPE feedback_api_up gauge\n");
    output.push_str("feedback_api_up 1\n");

    if let Some(handle) = &state.metrics {
        output.push_str(&handle.render());
    }

    output
}

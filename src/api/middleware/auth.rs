//! Authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{Request, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::error::AppError;

/// Extract the bearer credential from the Authorization header.
///
/// The header must read exactly `Bearer <credential>`; other schemes and
/// casings are treated as missing.
fn extract_bearer_token(req: &Request<Body>) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Middleware that requires the admin credential.
///
/// Rejected requests never reach the handler, so they cannot read or mutate storage.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let rejection = match extract_bearer_token(&req) {
        None => Some("missing credential"),
        Some(token) if !state.verifier.verify(token) => Some("invalid credential"),
        Some(_) => None,
    };

    if let Some(reason) = rejection {
        debug!(
            method = %req.method(),
            path = %req.uri().path(),
            reason,
            "Admin request rejected"
        );
        metrics::counter!("admin_auth_rejected_total").increment(1);
        return AppError::Unauthorized.into_response();
    }

    next.run(req).await
}

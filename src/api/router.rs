//! Router setup and configuration.

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    middleware,
    routing::{delete, get},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{fallback, feedback, health};
use crate::api::middleware::auth::require_admin;
use crate::api::state::AppState;
use crate::config::ServerConfig;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let admin = middleware::from_fn_with_state(state.clone(), require_admin);

    // Health and metrics routes (no auth required)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/metrics", get(health::metrics));

    // Listing and deleting need the admin credential; submitting and fetching one record do not.
    // route_layer only wraps the methods registered before it.
    let feedback_routes = Router::new()
        .route(
            "/api/feedback",
            get(feedback::list)
                .route_layer(admin.clone())
                .post(feedback::submit),
        )
        .route(
            "/api/feedback/{id}",
            delete(feedback::delete)
                .route_layer(admin)
                .get(feedback::get),
        );

    let router = Router::new()
        .merge(health_routes)
        .merge(feedback_routes)
        .method_not_allowed_fallback(fallback::not_found);

    let router = match &state.config.server.static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(fallback::not_found.into_service()),
        ),
        None => router.fallback(fallback::not_found),
    };

    with_middleware(router, &state.config.server).with_state(state)
}

/// Wrap routes in the shared middleware stack.
///
/// Innermost first: panic catching, CORS, request id propagation, tracing,
/// request id generation.
fn with_middleware(router: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    let cors = if config.cors_enabled {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    router
        .layer(CatchPanicLayer::custom(fallback::handle_panic))
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppConfig;
    use crate::storage::SqliteStorage;
    use crate::storage::traits::FeedbackStorage;

    async fn test_state() -> AppState {
        let mut config = AppConfig::default();
        config.auth.admin_token = "router_test_token".to_string();

        let storage = SqliteStorage::in_memory(false).await.unwrap();
        storage.initialize().await.unwrap();
        let storage: Arc<dyn FeedbackStorage> = Arc::new(storage);

        AppState::new(Arc::new(config), storage)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_panicking_handler_returns_generic_500() {
        let state = test_state().await;
        let config = state.config.server.clone();

        let router = Router::new().route(
            "/boom",
            get(|| async {
                if true {
                    panic!("database exploded");
                }
            }),
        );
        let app = with_middleware(router, &config).with_state(state);

        let response = app
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_body(response).await;
        assert_eq!(body["error"], "Internal server error");
        assert!(!body.to_string().contains("database exploded"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["error"], "Not found");
        assert_eq!(body["code"], 4001);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_json_404() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::put("/api/feedback/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_request_id_is_returned() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_static_dir_is_served_before_json_404() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("index.html"), "<h1>feedback</h1>").unwrap();

        let mut state = test_state().await;
        let mut config = (*state.config).clone();
        config.server.static_dir = Some(temp_dir.path().to_path_buf());
        state.config = Arc::new(config);
        let app = create_router(state);

        let response = app
            .clone()
            .oneshot(Request::get("/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::get("/missing.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["code"], 4001);
    }

    struct AcceptAll;

    impl crate::service::CredentialVerifier for AcceptAll {
        fn verify(&self, _credential: &str) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_admin_routes_use_injected_verifier() {
        let state = test_state().await.with_verifier(Arc::new(AcceptAll));
        let app = create_router(state);

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/feedback")
                    .header("Authorization", "Bearer anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::get("/api/feedback").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

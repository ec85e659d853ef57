//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::service::{CredentialVerifier, FeedbackService, StaticTokenVerifier};
use crate::storage::traits::FeedbackStorage;

/// Shared application state.
///
/// Built once at startup and cloned into every request; all members are
/// reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Storage backend.
    pub storage: Arc<dyn FeedbackStorage>,
    /// Feedback service.
    pub feedback_service: Arc<FeedbackService>,
    /// Admin credential check.
    pub verifier: Arc<dyn CredentialVerifier>,
    /// Prometheus recorder handle, when metrics are enabled.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Admin access is checked against `config.auth.admin_token`.
    pub fn new(config: Arc<AppConfig>, storage: Arc<dyn FeedbackStorage>) -> Self {
        let feedback_service = Arc::new(FeedbackService::new(Arc::clone(&storage)));
        let verifier: Arc<dyn CredentialVerifier> =
            Arc::new(StaticTokenVerifier::new(&config.auth));

        Self {
            config,
            storage,
            feedback_service,
            verifier,
            metrics: None,
        }
    }

    /// Replace the admin credential check.
    #[must_use]
    pub fn with_verifier(mut self, verifier: Arc<dyn CredentialVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    /// Expose a Prometheus recorder on `/metrics`.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

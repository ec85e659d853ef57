//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::feedback::NewFeedback;
use super::validation::{ValidationError, validate_submission};

/// Body of `POST /api/feedback`.
///
/// Fields are kept as raw JSON so that presence and type problems are reported
/// by validation with field-specific errors rather than as a generic parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitFeedbackRequest {
    /// Name of the customer.
    #[serde(default)]
    pub customer_name: Option<Value>,

    /// Free-form feedback text.
    #[serde(default)]
    pub feedback_text: Option<Value>,

    /// Rating from 1 to 5.
    #[serde(default)]
    pub rating: Option<Value>,
}

impl SubmitFeedbackRequest {
    /// Validate the request into storable input.
    ///
    /// # Errors
    ///
    /// Returns the first failing field check.
    pub fn validate(self) -> Result<NewFeedback, ValidationError> {
        validate_submission(self)
    }
}

/// Plain confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Create a new message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,

    /// Service version.
    pub version: String,
}

/// Readiness check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    /// Overall readiness status.
    pub ready: bool,

    /// Individual component statuses.
    pub components: ReadyComponents,
}

/// Component readiness statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyComponents {
    /// Storage backend status.
    pub storage: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_request_tolerates_missing_and_extra_fields() {
        let req: SubmitFeedbackRequest =
            serde_json::from_str(r#"{"customer_name":"Dana","extra":true}"#).unwrap();
        assert!(req.customer_name.is_some());
        assert!(req.feedback_text.is_none());
        assert!(req.rating.is_none());
    }

    #[test]
    fn test_submit_request_rejects_scalars() {
        assert!(serde_json::from_str::<SubmitFeedbackRequest>("\"text\"").is_err());
        assert!(serde_json::from_str::<SubmitFeedbackRequest>("42").is_err());
        assert!(serde_json::from_str::<SubmitFeedbackRequest>("{not json").is_err());
    }
}

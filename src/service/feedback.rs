//! Feedback service.
//!
//! Composes validation and storage, and turns storage outcomes into domain errors.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Feedback, SubmitFeedbackRequest, ValidationError};
use crate::error::{AppError, Result};
use crate::storage::traits::FeedbackStorage;

/// Service for submitting and managing feedback.
pub struct FeedbackService {
    /// Storage backend.
    storage: Arc<dyn FeedbackStorage>,
}

impl FeedbackService {
    /// Create a new feedback service.
    pub fn new(storage: Arc<dyn FeedbackStorage>) -> Self {
        Self { storage }
    }

    /// Validate and store a submission.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed input, or a storage error if the
    /// write fails. Nothing is stored when validation fails.
    pub async fn submit(&self, request: SubmitFeedbackRequest) -> Result<Feedback> {
        let new_feedback = request.validate().inspect_err(|err| {
            metrics::counter!("feedback_rejected_total", "reason" => rejection_reason(err))
                .increment(1);
        })?;

        let feedback = self.storage.create(&new_feedback).await?;

        metrics::counter!("feedback_submitted_total").increment(1);
        info!(
            id = feedback.id,
            rating = feedback.rating,
            "Feedback submitted"
        );

        Ok(feedback)
    }

    /// List every record, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub async fn list(&self) -> Result<Vec<Feedback>> {
        Ok(self.storage.list_all().await?)
    }

    /// Fetch one record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has this id, or an error if storage fails.
    pub async fn get(&self, id: i64) -> Result<Feedback> {
        self.storage
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Feedback".to_string()))
    }

    /// Delete one record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has this id, or an error if storage fails.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let removed = self.storage.delete_by_id(id).await?;
        if removed == 0 {
            return Err(AppError::NotFound("Feedback".to_string()));
        }

        metrics::counter!("feedback_deleted_total").increment(1);
        info!(id, "Feedback deleted");

        Ok(())
    }
}

const fn rejection_reason(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::MissingField(_) => "missing_field",
        ValidationError::FieldTooLong { .. } => "field_too_long",
        ValidationError::InvalidRating => "invalid_rating",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::storage::SqliteStorage;

    async fn create_test_service() -> (FeedbackService, Arc<dyn FeedbackStorage>) {
        let storage = SqliteStorage::in_memory(false).await.unwrap();
        storage.initialize().await.unwrap();
        let storage: Arc<dyn FeedbackStorage> = Arc::new(storage);
        (FeedbackService::new(Arc::clone(&storage)), storage)
    }

    fn request(value: serde_json::Value) -> SubmitFeedbackRequest {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_submit_then_get() {
        let (service, _) = create_test_service().await;

        let created = service
            .submit(request(json!({
                "customer_name": "Dana",
                "feedback_text": "Great!",
                "rating": 5
            })))
            .await
            .unwrap();

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_invalid_submission_is_not_persisted() {
        let (service, storage) = create_test_service().await;

        let err = service
            .submit(request(json!({
                "customer_name": "X",
                "feedback_text": "Y",
                "rating": 7
            })))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InvalidRating)
        ));
        assert_eq!(storage.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let (service, _) = create_test_service().await;

        let created = service
            .submit(request(json!({
                "customer_name": "Dana",
                "feedback_text": "Great!",
                "rating": 5
            })))
            .await
            .unwrap();

        service.delete(created.id).await.unwrap();

        assert!(matches!(
            service.get(created.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (service, storage) = create_test_service().await;
        service
            .submit(request(json!({
                "customer_name": "Dana",
                "feedback_text": "Great!",
                "rating": 5
            })))
            .await
            .unwrap();

        assert!(matches!(
            service.delete(9999).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(storage.count().await.unwrap(), 1);
    }

    #[test]
    fn test_rejection_reasons() {
        assert_eq!(
            rejection_reason(&ValidationError::MissingField("rating")),
            "missing_field"
        );
        assert_eq!(
            rejection_reason(&ValidationError::InvalidRating),
            "invalid_rating"
        );
    }
}

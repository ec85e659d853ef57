//! Feedback handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::state::AppState;
use crate::domain::{Feedback, MessageResponse, SubmitFeedbackRequest};
use crate::error::{AppError, Result};

/// Submit new feedback.
///
/// # Errors
///
/// Returns 400 for a malformed body or invalid fields, 500 if storage fails.
pub async fn submit(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SubmitFeedbackRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Feedback>)> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let feedback = state.feedback_service.submit(request).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// List all feedback, most recent first (admin only).
///
/// # Errors
///
/// Returns an error if storage fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Feedback>>> {
    let records = state.feedback_service.list().await?;
    Ok(Json(records))
}

/// Get one feedback record.
///
/// # Errors
///
/// Returns 404 if the id is unknown or not an integer.
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Feedback>> {
    let id = parse_id(&id)?;
    let feedback = state.feedback_service.get(id).await?;
    Ok(Json(feedback))
}

/// Delete one feedback record (admin only).
///
/// # Errors
///
/// Returns 404 if the id is unknown or not an integer.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state.feedback_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Feedback deleted successfully")))
}

/// An id that cannot name a stored record is reported as not found.
fn parse_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| AppError::NotFound("Feedback".to_string()))
}

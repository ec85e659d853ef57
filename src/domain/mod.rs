//! Domain models for the feedback service.
//!
//! This module contains the feedback entity, its validation rules, and the
//! API request/response contracts.

pub mod dto;
pub mod feedback;
pub mod validation;

pub use dto::{
    HealthResponse, MessageResponse, ReadyComponents, ReadyResponse, SubmitFeedbackRequest,
};
pub use feedback::{
    EXAMPLE_FEEDBACK, Feedback, MAX_CUSTOMER_NAME_LEN, MAX_FEEDBACK_TEXT_LEN, MAX_RATING,
    MIN_RATING, NewFeedback,
};
pub use validation::{ValidationError, validate_submission};

//! Feedback entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of `customer_name`, in characters.
pub const MAX_CUSTOMER_NAME_LEN: usize = 100;

/// Maximum length of `feedback_text`, in characters.
pub const MAX_FEEDBACK_TEXT_LEN: usize = 1000;

/// Lowest accepted rating.
pub const MIN_RATING: i64 = 1;

/// Highest accepted rating.
pub const MAX_RATING: i64 = 5;

/// A persisted customer feedback record.
///
/// Records are immutable once stored; they are only ever created or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Feedback {
    /// Storage-assigned identifier, never reused.
    pub id: i64,

    /// Name of the customer.
    pub customer_name: String,

    /// Free-form feedback text.
    pub feedback_text: String,

    /// Rating from 1 to 5.
    pub rating: i64,

    /// When the record was stored.
    pub submitted_at: DateTime<Utc>,
}

/// Validated input for a new feedback record.
///
/// Only [`SubmitFeedbackRequest::validate`](super::SubmitFeedbackRequest::validate)
/// produces values that are guaranteed to satisfy the field constraints; storage
/// re-checks them regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    /// Name of the customer.
    pub customer_name: String,
    /// Free-form feedback text.
    pub feedback_text: String,
    /// Rating from 1 to 5.
    pub rating: i64,
}

impl NewFeedback {
    /// Create a new feedback input without validating it.
    pub fn new(customer_name: impl Into<String>, feedback_text: impl Into<String>, rating: i64) -> Self {
        Self {
            customer_name: customer_name.into(),
            feedback_text: feedback_text.into(),
            rating,
        }
    }
}

/// Records inserted when the table is first created.
pub const EXAMPLE_FEEDBACK: [(&str, &str, i64); 3] = [
    (
        "Alice Smith",
        "Excellent service! The staff was very helpful.",
        5,
    ),
    (
        "Bob Johnson",
        "Good experience overall, but could be faster.",
        4,
    ),
    ("Carol White", "Average service, nothing special.", 3),
];

//! Field validation for feedback submissions.
//!
//! Checks run in a fixed order and stop at the first failure:
//! presence of all fields, `customer_name` length, `feedback_text` length, rating.

use serde_json::Value;

use super::dto::SubmitFeedbackRequest;
use super::feedback::{
    MAX_CUSTOMER_NAME_LEN, MAX_FEEDBACK_TEXT_LEN, MAX_RATING, MIN_RATING, NewFeedback,
};

/// A submission that cannot be stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Field is absent, null, empty, or not of the expected kind.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Text field exceeds its maximum length.
    #[error("{field} must be {max} characters or less")]
    FieldTooLong {
        /// Offending field.
        field: &'static str,
        /// Maximum length in characters.
        max: usize,
    },

    /// Rating is not an integer between 1 and 5.
    #[error("rating must be an integer between 1 and 5")]
    InvalidRating,
}

/// Validate a raw submission.
///
/// Values are returned unchanged: no trimming or normalization happens here.
///
/// # Errors
///
/// Returns the first failing check as a [`ValidationError`].
pub fn validate_submission(
    request: SubmitFeedbackRequest,
) -> Result<NewFeedback, ValidationError> {
    let customer_name = required_text(request.customer_name, "customer_name")?;
    let feedback_text = required_text(request.feedback_text, "feedback_text")?;
    let rating = required_value(request.rating, "rating")?;

    check_length(&customer_name, "customer_name", MAX_CUSTOMER_NAME_LEN)?;
    check_length(&feedback_text, "feedback_text", MAX_FEEDBACK_TEXT_LEN)?;
    let rating = check_rating(&rating)?;

    Ok(NewFeedback {
        customer_name,
        feedback_text,
        rating,
    })
}

fn required_text(value: Option<Value>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn required_value(value: Option<Value>, field: &'static str) -> Result<Value, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::MissingField(field)),
        Some(v) => Ok(v),
    }
}

fn check_length(value: &str, field: &'static str, max: usize) -> Result<(), ValidationError> {
    // Characters, not bytes, to agree with SQLite's length() on TEXT
    if value.chars().count() > max {
        return Err(ValidationError::FieldTooLong { field, max });
    }
    Ok(())
}

fn check_rating(value: &Value) -> Result<i64, ValidationError> {
    // Strict: numeric strings and floats such as 5.0 are rejected
    value
        .as_i64()
        .filter(|rating| (MIN_RATING..=MAX_RATING).contains(rating))
        .ok_or(ValidationError::InvalidRating)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(value: Value) -> SubmitFeedbackRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_submission_is_returned_unchanged() {
        let result = validate_submission(request(json!({
            "customer_name": "  Dana ",
            "feedback_text": "Great!",
            "rating": 5
        })))
        .unwrap();

        assert_eq!(result, NewFeedback::new("  Dana ", "Great!", 5));
    }

    #[test]
    fn test_missing_fields() {
        let cases = [
            (json!({"feedback_text": "t", "rating": 3}), "customer_name"),
            (json!({"customer_name": "", "feedback_text": "t", "rating": 3}), "customer_name"),
            (json!({"customer_name": 12, "feedback_text": "t", "rating": 3}), "customer_name"),
            (json!({"customer_name": "n", "feedback_text": null, "rating": 3}), "feedback_text"),
            (json!({"customer_name": "n", "feedback_text": "t"}), "rating"),
            (json!({"customer_name": "n", "feedback_text": "t", "rating": null}), "rating"),
            (json!({"customer_name": "n", "feedback_text": "t", "rating": ""}), "rating"),
        ];

        for (body, field) in cases {
            assert_eq!(
                validate_submission(request(body.clone())),
                Err(ValidationError::MissingField(field)),
                "body: {body}"
            );
        }
    }

    #[test]
    fn test_length_limits_are_inclusive() {
        let name = "n".repeat(MAX_CUSTOMER_NAME_LEN);
        let text = "t".repeat(MAX_FEEDBACK_TEXT_LEN);
        assert!(
            validate_submission(request(json!({
                "customer_name": name,
                "feedback_text": text,
                "rating": 1
            })))
            .is_ok()
        );

        let result = validate_submission(request(json!({
            "customer_name": "n".repeat(MAX_CUSTOMER_NAME_LEN + 1),
            "feedback_text": "t",
            "rating": 1
        })));
        assert_eq!(
            result,
            Err(ValidationError::FieldTooLong {
                field: "customer_name",
                max: MAX_CUSTOMER_NAME_LEN
            })
        );

        let result = validate_submission(request(json!({
            "customer_name": "n",
            "feedback_text": "t".repeat(MAX_FEEDBACK_TEXT_LEN + 1),
            "rating": 1
        })));
        assert_eq!(
            result,
            Err(ValidationError::FieldTooLong {
                field: "feedback_text",
                max: MAX_FEEDBACK_TEXT_LEN
            })
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // 100 two-byte characters is within the limit
        let name = "é".repeat(MAX_CUSTOMER_NAME_LEN);
        assert!(
            validate_submission(request(json!({
                "customer_name": name,
                "feedback_text": "t",
                "rating": 2
            })))
            .is_ok()
        );
    }

    #[test]
    fn test_invalid_ratings() {
        for rating in [json!(0), json!(6), json!(7), json!(-1), json!(4.5), json!(5.0), json!("5"), json!(true)] {
            let result = validate_submission(request(json!({
                "customer_name": "X",
                "feedback_text": "Y",
                "rating": rating
            })));
            assert_eq!(result, Err(ValidationError::InvalidRating), "rating: {rating}");
        }
    }

    #[test]
    fn test_check_precedence() {
        // Presence wins over every other failure
        let result = validate_submission(request(json!({
            "customer_name": "n".repeat(200),
            "feedback_text": "",
            "rating": 9
        })));
        assert_eq!(result, Err(ValidationError::MissingField("feedback_text")));

        // Name length before text length before rating
        let result = validate_submission(request(json!({
            "customer_name": "n".repeat(101),
            "feedback_text": "t".repeat(1001),
            "rating": 9
        })));
        assert!(matches!(
            result,
            Err(ValidationError::FieldTooLong { field: "customer_name", .. })
        ));

        let result = validate_submission(request(json!({
            "customer_name": "n",
            "feedback_text": "t".repeat(1001),
            "rating": 9
        })));
        assert!(matches!(
            result,
            Err(ValidationError::FieldTooLong { field: "feedback_text", .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingField("rating").to_string(),
            "rating is required"
        );
        assert_eq!(
            ValidationError::FieldTooLong {
                field: "customer_name",
                max: 100
            }
            .to_string(),
            "customer_name must be 100 characters or less"
        );
        assert_eq!(
            ValidationError::InvalidRating.to_string(),
            "rating must be an integer between 1 and 5"
        );
    }
}

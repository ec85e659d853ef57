//! Service layer module.
//!
//! Contains business logic for feedback submission and admin access.

pub mod credential;
pub mod feedback;

pub use credential::{CredentialVerifier, StaticTokenVerifier};
pub use feedback::FeedbackService;

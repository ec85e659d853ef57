//! HTTP request handlers.

pub mod feedback;
pub mod fallback;
pub mod health;

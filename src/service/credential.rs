//! Credential verification for admin operations.
//!
//! Admin routes are gated by a [`CredentialVerifier`]. The shipped
//! implementation checks a single shared secret from configuration; a
//! token or identity based scheme can replace it without touching handlers.

use crate::config::AuthConfig;

/// Decides whether a presented bearer credential grants admin access.
pub trait CredentialVerifier: Send + Sync {
    /// Return `true` if `credential` (the part after `Bearer `) is accepted.
    fn verify(&self, credential: &str) -> bool;
}

/// Verifier backed by one static shared secret.
///
/// No sessions, no expiry and no per-user identity.
pub struct StaticTokenVerifier {
    token: String,
}

impl StaticTokenVerifier {
    /// Create a verifier for the configured admin token.
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            token: config.admin_token.clone(),
        }
    }
}

impl CredentialVerifier for StaticTokenVerifier {
    fn verify(&self, credential: &str) -> bool {
        !self.token.is_empty() && constant_time_eq(credential.as_bytes(), self.token.as_bytes())
    }
}

/// Compare without short-circuiting on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

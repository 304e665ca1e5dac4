//! Bot verification port used before creating short codes.

use async_trait::async_trait;
use std::net::IpAddr;

/// Decides whether an encode request comes from a human.
///
/// # Implementations
///
/// - [`crate::infrastructure::verification::RecaptchaVerifier`] - Google reCAPTCHA v3
/// - [`crate::infrastructure::verification::NullVerifier`] - Accepts everything (verification disabled)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HumanVerifier: Send + Sync {
    /// Returns false when verification is disabled; callers skip [`Self::verify`] then.
    fn is_enabled(&self) -> bool;

    /// Verifies a client-supplied token. Any failure yields `false`.
    async fn verify(&self, token: Option<String>, remote_ip: Option<IpAddr>) -> bool;
}

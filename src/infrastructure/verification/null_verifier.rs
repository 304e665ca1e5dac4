use std::net::IpAddr;

use async_trait::async_trait;

use crate::domain::verifier::HumanVerifier;

/// Verifier used when no reCAPTCHA secret is configured.
///
/// Reports itself as disabled, so the encode handler skips verification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullVerifier;

#[async_trait]
impl HumanVerifier for NullVerifier {
    fn is_enabled(&self) -> bool {
        false
    }

    async fn verify(&self, _token: Option<String>, _remote_ip: Option<IpAddr>) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_verifier_accepts_everything() {
        let verifier = NullVerifier;

        assert!(!verifier.is_enabled());
        assert!(verifier.verify(None, None).await);
        assert!(verifier.verify(Some(String::new()), None).await);
    }
}

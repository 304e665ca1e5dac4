//! Google reCAPTCHA v3 verification.
//!
//! Tokens are checked against the `siteverify` endpoint. A verdict passes
//! only when Google reports success, the action matches the one the page
//! requested, and the score reaches the configured minimum. Any network or
//! parse failure is treated as a failed verification.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::verifier::HumanVerifier;

pub const SITEVERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Action name the browser passes to `grecaptcha.execute`.
pub const ENCODE_ACTION: &str = "encode";

const VERIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Subset of the `siteverify` response used for the verdict.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteVerifyResponse {
    #[serde(default)]
    pub success: bool,
    pub score: Option<f64>,
    pub action: Option<String>,
    #[serde(rename = "error-codes", default)]
    pub error_codes: Vec<String>,
}

pub struct RecaptchaVerifier {
    client: reqwest::Client,
    secret: String,
    min_score: f64,
    action: String,
    verify_url: String,
}

impl RecaptchaVerifier {
    pub fn new(secret: impl Into<String>, min_score: f64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(VERIFY_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            secret: secret.into(),
            min_score,
            action: ENCODE_ACTION.to_string(),
            verify_url: SITEVERIFY_URL.to_string(),
        }
    }

    /// Points verification at a different endpoint.
    pub fn with_verify_url(mut self, url: impl Into<String>) -> Self {
        self.verify_url = url.into();
        self
    }

    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    /// Applies the acceptance rules to a decoded response.
    ///
    /// Missing `action` or `score` fields do not fail the check.
    pub fn evaluate(&self, response: &SiteVerifyResponse) -> bool {
        if !response.success {
            debug!(errors = ?response.error_codes, "reCAPTCHA rejected token");
            return false;
        }

        if let Some(action) = response.action.as_deref()
            && action != self.action
        {
            debug!(action, expected = %self.action, "reCAPTCHA action mismatch");
            return false;
        }

        if let Some(score) = response.score
            && score < self.min_score
        {
            debug!(score, min_score = self.min_score, "reCAPTCHA score too low");
            return false;
        }

        true
    }

    async fn siteverify(
        &self,
        token: &str,
        remote_ip: Option<IpAddr>,
    ) -> Result<SiteVerifyResponse, reqwest::Error> {
        let remote_ip = remote_ip.map(|ip| ip.to_string());

        let mut form = vec![("secret", self.secret.as_str()), ("response", token)];
        if let Some(ip) = remote_ip.as_deref() {
            form.push(("remoteip", ip));
        }

        self.client
            .post(&self.verify_url)
            .form(&form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[async_trait]
impl HumanVerifier for RecaptchaVerifier {
    fn is_enabled(&self) -> bool {
        !self.secret.is_empty()
    }

    async fn verify(&self, token: Option<String>, remote_ip: Option<IpAddr>) -> bool {
        if !self.is_enabled() {
            return true;
        }

        let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
            return false;
        };

        match self.siteverify(&token, remote_ip).await {
            Ok(response) => self.evaluate(&response),
            Err(e) => {
                warn!(error = %e, "reCAPTCHA verification request failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, body::Bytes, routing::post};
    use serde_json::json;

    fn response(success: bool, score: Option<f64>, action: Option<&str>) -> SiteVerifyResponse {
        SiteVerifyResponse {
            success,
            score,
            action: action.map(str::to_string),
            error_codes: Vec::new(),
        }
    }

    /// Serves a fake `siteverify` endpoint that accepts the token "good".
    async fn spawn_siteverify() -> String {
        async fn handler(body: Bytes) -> Json<serde_json::Value> {
            let form = String::from_utf8_lossy(&body);
            let valid = form.split('&').any(|pair| pair == "response=good")
                && form.split('&').any(|pair| pair == "secret=test-secret");

            if valid {
                Json(json!({"success": true, "score": 0.9, "action": "encode"}))
            } else {
                Json(json!({"success": false, "error-codes": ["invalid-input-response"]}))
            }
        }

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/siteverify", post(handler));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}/siteverify")
    }

    #[test]
    fn test_evaluate_accepts_good_response() {
        let verifier = RecaptchaVerifier::new("secret", 0.5);
        assert!(verifier.evaluate(&response(true, Some(0.9), Some("encode"))));
        assert!(verifier.evaluate(&response(true, Some(0.5), Some("encode"))));
    }

    #[test]
    fn test_evaluate_rejects_failure() {
        let verifier = RecaptchaVerifier::new("secret", 0.5);
        assert!(!verifier.evaluate(&response(false, Some(0.9), Some("encode"))));
    }

    #[test]
    fn test_evaluate_rejects_low_score() {
        let verifier = RecaptchaVerifier::new("secret", 0.5);
        assert!(!verifier.evaluate(&response(true, Some(0.3), Some("encode"))));
    }

    #[test]
    fn test_evaluate_rejects_wrong_action() {
        let verifier = RecaptchaVerifier::new("secret", 0.5);
        assert!(!verifier.evaluate(&response(true, Some(0.9), Some("login"))));
    }

    #[test]
    fn test_evaluate_tolerates_missing_fields() {
        let verifier = RecaptchaVerifier::new("secret", 0.5);
        assert!(verifier.evaluate(&response(true, None, None)));
    }

    #[test]
    fn test_response_parsing() {
        let parsed: SiteVerifyResponse = serde_json::from_value(json!({
            "success": false,
            "error-codes": ["timeout-or-duplicate"],
            "hostname": "example.com"
        }))
        .unwrap();

        assert!(!parsed.success);
        assert_eq!(parsed.error_codes, vec!["timeout-or-duplicate"]);
        assert_eq!(parsed.score, None);
    }

    #[test]
    fn test_enabled_only_with_secret() {
        assert!(RecaptchaVerifier::new("secret", 0.5).is_enabled());
        assert!(!RecaptchaVerifier::new("", 0.5).is_enabled());
    }

    #[tokio::test]
    async fn test_blank_token_rejected_without_request() {
        let verifier =
            RecaptchaVerifier::new("secret", 0.5).with_verify_url("http://127.0.0.1:1/unused");

        assert!(!verifier.verify(None, None).await);
        assert!(!verifier.verify(Some("   ".to_string()), None).await);
    }

    #[tokio::test]
    async fn test_verify_against_endpoint() {
        let url = spawn_siteverify().await;
        let verifier = RecaptchaVerifier::new("test-secret", 0.5).with_verify_url(url);
        let ip = Some("127.0.0.1".parse().unwrap());

        assert!(verifier.verify(Some("good".to_string()), ip).await);
        assert!(!verifier.verify(Some("bad".to_string()), ip).await);
    }

    #[tokio::test]
    async fn test_score_threshold_against_endpoint() {
        let url = spawn_siteverify().await;
        let verifier = RecaptchaVerifier::new("test-secret", 0.95).with_verify_url(url);

        assert!(!verifier.verify(Some("good".to_string()), None).await);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails_closed() {
        let verifier =
            RecaptchaVerifier::new("secret", 0.5).with_verify_url("http://127.0.0.1:1/siteverify");

        assert!(!verifier.verify(Some("token".to_string()), None).await);
    }
}

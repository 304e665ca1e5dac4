//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::domain::errors::ShortenerError;
use crate::domain::verifier::HumanVerifier;
use crate::infrastructure::verification::{NullVerifier, RecaptchaVerifier};

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub verifier: Arc<dyn HumanVerifier>,
    /// Prefix for short URLs; `None` derives it from the request.
    pub base_url: Option<String>,
    /// Public reCAPTCHA key reported by `/health` for browser clients.
    pub recaptcha_site_key: Option<String>,
}

impl AppState {
    pub fn new(shortener: ShortenerService, verifier: Arc<dyn HumanVerifier>) -> Self {
        Self {
            shortener: Arc::new(shortener),
            verifier,
            base_url: None,
            recaptcha_site_key: None,
        }
    }

    /// Wires the configured strategy and bot verifier.
    ///
    /// # Errors
    ///
    /// Fails when the mapping store cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, ShortenerError> {
        let shortener = ShortenerService::from_config(config)?;

        let verifier: Arc<dyn HumanVerifier> = match config.recaptcha_secret_key {
            Some(ref secret) => Arc::new(RecaptchaVerifier::new(
                secret.clone(),
                config.recaptcha_min_score,
            )),
            None => Arc::new(NullVerifier),
        };

        Ok(Self {
            base_url: config.base_url.clone(),
            recaptcha_site_key: config.recaptcha_site_key.clone(),
            ..Self::new(shortener, verifier)
        })
    }
}

//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then passed by
//! value to the server and the admin CLI.
//!
//! ## Example
//!
//! ```bash
//! export ALGORITHM="random"            # or "keyed_hash"
//! export DATA_PATH="data/store.json"
//! export BASE_URL="https://s.example.com"
//! ```
//!
//! ## Variables
//!
//! - `DATA_PATH` - Mapping store file (default: `data/store.json`)
//! - `ALGORITHM` / `ALGURATHEM` - `random` or `keyed_hash` (default: `random`);
//!   `ALGURATHEM` wins when both are set
//! - `SHORTLINK_KEY` - Codec secret for `keyed_hash` (default: `shortlink-static-key`)
//! - `CODE_LENGTH` - Generated code length, 1 to 64 (default: 10)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public prefix for short URLs (default: derived from the request)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RECAPTCHA_SITE_KEY` - Public key exposed to the browser
//! - `RECAPTCHA_SECRET_KEY` - Enables bot verification on `/encode` when set
//! - `RECAPTCHA_MIN_SCORE` - Minimum accepted score, 0.0 to 1.0 (default: 0.5)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::domain::entities::Algorithm;
use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

pub const DEFAULT_DATA_PATH: &str = "data/store.json";
pub const DEFAULT_SHORTLINK_KEY: &str = "shortlink-static-key";
pub const MAX_CODE_LENGTH: usize = 64;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub algorithm: Algorithm,
    /// Secret the `keyed_hash` codec derives its key from.
    pub shortlink_key: String,
    pub code_length: usize,
    pub listen_addr: String,
    /// Prefix for returned short URLs, without a trailing slash.
    pub base_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
    pub recaptcha_site_key: Option<String>,
    pub recaptcha_secret_key: Option<String>,
    pub recaptcha_min_score: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            algorithm: Algorithm::Random,
            shortlink_key: DEFAULT_SHORTLINK_KEY.to_string(),
            code_length: DEFAULT_CODE_LENGTH,
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            recaptcha_site_key: None,
            recaptcha_secret_key: None,
            recaptcha_min_score: 0.5,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the algorithm name is not recognised.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let data_path = env::var("DATA_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let algorithm = match env::var("ALGURATHEM").or_else(|_| env::var("ALGORITHM")) {
            Ok(raw) => raw
                .parse::<Algorithm>()
                .context("ALGORITHM must be 'random' or 'keyed_hash'")?,
            Err(_) => defaults.algorithm,
        };

        let shortlink_key = env::var("SHORTLINK_KEY").unwrap_or(defaults.shortlink_key);

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.code_length);

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);

        let base_url = non_empty_var("BASE_URL").map(|v| v.trim_end_matches('/').to_string());

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let recaptcha_min_score = env::var("RECAPTCHA_MIN_SCORE")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.recaptcha_min_score);

        Ok(Self {
            data_path,
            algorithm,
            shortlink_key,
            code_length,
            listen_addr,
            base_url,
            log_level,
            log_format,
            recaptcha_site_key: non_empty_var("RECAPTCHA_SITE_KEY"),
            recaptcha_secret_key: non_empty_var("RECAPTCHA_SECRET_KEY"),
            recaptcha_min_score,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code_length` is outside `1..=64`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` has no port
    /// - `shortlink_key` is empty while `keyed_hash` is selected
    /// - `recaptcha_min_score` is outside `0.0..=1.0`
    /// - `base_url` is not an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            anyhow::bail!(
                "CODE_LENGTH must be between 1 and {MAX_CODE_LENGTH}, got {}",
                self.code_length
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.algorithm == Algorithm::KeyedHash && self.shortlink_key.is_empty() {
            anyhow::bail!("SHORTLINK_KEY must not be empty when ALGORITHM is 'keyed_hash'");
        }

        if !(0.0..=1.0).contains(&self.recaptcha_min_score) {
            anyhow::bail!(
                "RECAPTCHA_MIN_SCORE must be between 0.0 and 1.0, got {}",
                self.recaptcha_min_score
            );
        }

        if let Some(ref base_url) = self.base_url {
            let parsed = url::Url::parse(base_url)
                .with_context(|| format!("BASE_URL is not a valid URL: '{base_url}'"))?;

            if !matches!(parsed.scheme(), "http" | "https") {
                anyhow::bail!("BASE_URL must start with 'http://' or 'https://', got '{base_url}'");
            }
        }

        Ok(())
    }

    /// Returns whether `/encode` requires a reCAPTCHA token.
    pub fn is_recaptcha_enabled(&self) -> bool {
        self.recaptcha_secret_key.is_some()
    }

    /// Prints configuration summary (without secrets).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Algorithm: {}", self.algorithm);

        if self.algorithm.uses_store() {
            tracing::info!("  Data path: {}", self.data_path.display());
            tracing::info!("  Code length: {}", self.code_length);
        } else if self.shortlink_key == DEFAULT_SHORTLINK_KEY {
            tracing::warn!("  SHORTLINK_KEY is the built-in default; set a private secret");
        }

        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: from request Host header"),
        }

        if self.is_recaptcha_enabled() {
            tracing::info!(
                "  reCAPTCHA: enabled (min score {})",
                self.recaptcha_min_score
            );
        } else {
            tracing::info!("  reCAPTCHA: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

//! DTOs for the encode endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EncodeRequest {
    /// Absolute http(s) URL; checked in the handler.
    #[validate(length(max = 8192, message = "URL is too long"))]
    pub url: Option<String>,

    /// reCAPTCHA v3 token, required only when verification is enabled.
    #[validate(length(max = 4096))]
    pub recaptcha_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub short_url: String,
}

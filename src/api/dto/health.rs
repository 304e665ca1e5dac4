//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Active algorithm: `random` or `keyed_hash`.
    pub strategy: String,

    /// Stored mappings; absent in `keyed_hash` mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mappings: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recaptcha_site_key: Option<String>,
}

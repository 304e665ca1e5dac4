//! DTOs for the decode endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Full short URL or bare short code.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct DecodeRequest {
    #[validate(length(max = 8192, message = "Short URL is too long"))]
    pub short_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DecodeResponse {
    pub url: String,
}

//! Handler for the encode endpoint.

use axum::{Json, extract::State, http::HeaderMap};
use serde_json::json;
use tracing::{debug, warn};

use crate::api::dto::encode::{EncodeRequest, EncodeResponse};
use crate::api::extractors::{ClientIp, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::base_url_from_headers;
use crate::utils::url_normalizer::normalize_url;

/// Shortens a URL with the configured algorithm.
///
/// # Endpoint
///
/// `POST /encode`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "recaptcha_token": "03AGdBq..."   // only when verification is enabled
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:3000/aZ3kQ9pL0x" }
/// ```
///
/// The prefix is `BASE_URL` when configured, else `scheme://Host` of the
/// request. In `random` mode the same URL always returns the same short URL;
/// in `keyed_hash` mode every call returns a new token.
///
/// # Errors
///
/// - 400 Bad Request: invalid JSON, missing or invalid URL, missing Host header
/// - 403 Forbidden: bot verification failed
/// - 500 Internal Server Error: no free code could be found or the store
///   file could not be written
pub async fn encode_handler(
    State(state): State<AppState>,
    ClientIp(remote_ip): ClientIp,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<EncodeRequest>,
) -> Result<Json<EncodeResponse>, AppError> {
    let url = normalize_url(payload.url.as_deref().unwrap_or_default()).map_err(|e| {
        AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
    })?;

    if state.verifier.is_enabled()
        && !state.verifier.verify(payload.recaptcha_token, remote_ip).await
    {
        warn!(remote_ip = ?remote_ip, "Bot verification failed");
        return Err(AppError::forbidden(
            "Recaptcha verification failed",
            json!({}),
        ));
    }

    let base_url = match state.base_url {
        Some(ref base_url) => base_url.clone(),
        None => base_url_from_headers(&headers)?,
    };

    let shortener = state.shortener.clone();
    let code = tokio::task::spawn_blocking(move || shortener.encode(&url))
        .await
        .map_err(|e| {
            AppError::internal("Encode task failed", json!({ "reason": e.to_string() }))
        })??;

    debug!(code = %code, "Encoded URL");

    Ok(Json(EncodeResponse {
        short_url: format!("{base_url}/{code}"),
    }))
}

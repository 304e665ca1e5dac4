//! Handler for the decode endpoint.

use axum::{Json, extract::State};
use serde_json::json;
use tracing::debug;

use crate::api::dto::decode::{DecodeRequest, DecodeResponse};
use crate::api::extractors::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_code::extract_short_code;

/// Resolves a short URL or bare code to the original URL.
///
/// # Endpoint
///
/// `POST /decode`
///
/// # Request Body
///
/// ```json
/// { "short_url": "http://localhost:3000/aZ3kQ9pL0x" }
/// ```
///
/// A bare code (`"aZ3kQ9pL0x"`) is accepted as well.
///
/// # Response
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: invalid JSON, or no code could be extracted
/// - 404 Not Found: unknown code, or a token that fails authentication
pub async fn decode_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<DecodeRequest>,
) -> Result<Json<DecodeResponse>, AppError> {
    let code = extract_short_code(payload.short_url.as_deref().unwrap_or_default())
        .ok_or_else(|| AppError::bad_request("Invalid short URL", json!({})))?;

    match resolve(&state, code.clone()).await? {
        Some(url) => Ok(Json(DecodeResponse { url })),
        None => {
            debug!(code = %code, "Decode miss");
            Err(AppError::not_found(
                "Short URL not found",
                json!({ "code": code }),
            ))
        }
    }
}

/// Runs a lookup on the blocking pool.
pub(crate) async fn resolve(state: &AppState, code: String) -> Result<Option<String>, AppError> {
    let shortener = state.shortener.clone();

    tokio::task::spawn_blocking(move || shortener.decode(&code))
        .await
        .map_err(|e| AppError::internal("Decode task failed", json!({ "reason": e.to_string() })))
}

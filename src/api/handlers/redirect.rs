//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::api::handlers::decode::resolve;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response
///
/// 302 Found with `Location` set to the original URL. Non-ASCII characters
/// are percent-encoded so the header stays valid.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or the token is invalid.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let Some(long_url) = resolve(&state, code.clone()).await? else {
        debug!(code = %code, "Redirect miss");
        return Err(AppError::not_found(
            "Short URL not found",
            json!({ "code": code }),
        ));
    };

    let location = url::Url::parse(&long_url)
        .map(String::from)
        .unwrap_or(long_url);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

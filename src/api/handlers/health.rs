//! Handler for health check endpoint.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::health::HealthResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns service status and the active algorithm.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "version": "0.1.0",
///   "strategy": "random",
///   "mappings": 42,
///   "recaptcha_site_key": "6Lc..."
/// }
/// ```
///
/// `mappings` is omitted in `keyed_hash` mode, `recaptcha_site_key` when
/// none is configured. The count waits for the store lock, which a
/// concurrent write holds across its fsync, so it runs on the blocking pool.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    let shortener = state.shortener.clone();
    let mappings = tokio::task::spawn_blocking(move || shortener.mapping_count())
        .await
        .map_err(|e| AppError::internal("Health task failed", json!({ "reason": e.to_string() })))?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        strategy: state.shortener.algorithm().to_string(),
        mappings,
        recaptcha_site_key: state.recaptcha_site_key.clone(),
    }))
}

//! API route configuration.

use crate::api::handlers::{decode_handler, encode_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// JSON endpoints for shortening and resolving URLs.
///
/// # Endpoints
///
/// - `POST /encode` - Shorten a URL
/// - `POST /decode` - Resolve a short URL or code
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/encode", post(encode_handler))
        .route("/decode", post(decode_handler))
}

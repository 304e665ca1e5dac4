//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /encode`  - Shorten a URL
//! - `POST /decode`  - Resolve a short URL
//! - `GET  /health`  - Service status and active algorithm
//! - `GET  /{code}`  - Short link redirect
//!
//! Literal routes take precedence over `/{code}`, so `GET /encode` answers
//! 405 rather than being looked up as a code.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// All routes with state and tracing applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with trailing-slash normalization.
///
/// Normalization runs before routing, so it wraps the whole router rather
/// than being added with `Router::layer`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::ShortenerService;
    use crate::infrastructure::crypto::KeyedCipher;
    use crate::infrastructure::verification::NullVerifier;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> AppState {
        let shortener = ShortenerService::with_codec(Arc::new(KeyedCipher::new("routes")));
        AppState::new(shortener, Arc::new(NullVerifier))
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let request = Request::get("/health/").body(Body::empty()).unwrap();

        let response = app_router(state()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_code_is_not_found() {
        let request = Request::get("/missing").body(Body::empty()).unwrap();

        let response = app_router(state()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

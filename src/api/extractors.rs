//! Custom request extractors.

use std::net::{IpAddr, SocketAddr};

use axum::{
    body::Bytes,
    extract::{ConnectInfo, FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// JSON body parsed without a `Content-Type` check, then validated.
///
/// An empty or whitespace-only body is read as `T::default()`, so clients may
/// omit the body entirely and get a field-level error instead of a parse error.
///
/// ```rust,ignore
/// async fn handler(ValidatedJson(data): ValidatedJson<EncodeRequest>) -> ... {
///     // data passed validation
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::bad_request("Unable to read request body", json!({ "reason": e.body_text() }))
        })?;

        let data = if body.iter().all(u8::is_ascii_whitespace) {
            T::default()
        } else {
            serde_json::from_slice(&body).map_err(|e| {
                AppError::bad_request("Invalid JSON", json!({ "reason": e.to_string() }))
            })?
        };

        data.validate()?;

        Ok(ValidatedJson(data))
    }
}

/// Peer address of the connection, when the server records it.
#[derive(Debug, Clone, Copy)]
pub struct ClientIp(pub Option<IpAddr>);

impl<S: Send + Sync> FromRequestParts<S> for ClientIp {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        Ok(ClientIp(ip))
    }
}

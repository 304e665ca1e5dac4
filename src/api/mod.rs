//! HTTP layer translating requests into shortener operations.
//!
//! # Modules
//!
//! - [`dto`] - Request and response bodies
//! - [`extractors`] - Lenient JSON body and peer address extraction
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - JSON endpoint composition

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;

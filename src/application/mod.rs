//! Application layer services.
//!
//! Services hold the domain seams behind trait objects and give HTTP handlers
//! and the admin CLI one API regardless of the configured algorithm.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Encode/decode dispatch

pub mod services;

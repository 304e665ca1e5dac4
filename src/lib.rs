//! # Shortlink
//!
//! A URL shortener built with Axum with two interchangeable algorithms.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Mapping snapshot, errors and trait seams
//! - **Application Layer** ([`application`]) - Strategy dispatch
//! - **Infrastructure Layer** ([`infrastructure`]) - File store, AES-GCM codec, reCAPTCHA
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Algorithms
//!
//! - `random` - random alphanumeric codes kept in a JSON file; the same URL
//!   always gets the same code
//! - `keyed_hash` - the code is the URL encrypted under a shared secret;
//!   nothing is stored and every encode yields a new code
//!
//! ## Quick Start
//!
//! ```bash
//! export ALGORITHM="random"
//! export DATA_PATH="data/store.json"
//!
//! cargo run
//!
//! curl -s localhost:3000/encode -d '{"url":"https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{Algorithm, MappingSnapshot};
    pub use crate::domain::errors::ShortenerError;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

//! Domain layer containing the short-code resolution contracts.
//!
//! It defines entities, errors and the trait seams that the infrastructure
//! layer implements, independent of HTTP or filesystem concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Durable mapping snapshot and the algorithm selector
//! - [`errors`] - [`errors::ShortenerError`]
//! - [`repositories`] - The persisted mapping contract
//! - [`generator`] - Candidate code generation
//! - [`codec`] - Stateless reversible tokens
//! - [`verifier`] - Bot verification before encoding
//!
//! # Resolution Flow
//!
//! 1. The HTTP layer validates the URL
//! 2. [`crate::application::services::ShortenerService`] dispatches on the configured [`entities::Algorithm`]
//! 3. Store mode: [`repositories::MappingRepository`] reuses or creates a code using a [`generator::CodeGenerator`]
//! 4. Codec mode: [`codec::UrlCodec`] encrypts the URL into the code itself

pub mod codec;
pub mod entities;
pub mod errors;
pub mod generator;
pub mod repositories;
pub mod verifier;

//! Infrastructure layer for storage, cryptography and external services.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - JSON file mapping store
//! - [`crypto`] - AES-256-GCM URL codec
//! - [`verification`] - reCAPTCHA and no-op bot verification

pub mod crypto;
pub mod persistence;
pub mod verification;

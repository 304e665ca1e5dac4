//! Helpers for code generation, URL input handling and request inspection.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_normalizer`] - Validation of URLs submitted for shortening
//! - [`short_code`] - Short code extraction from `/decode` input
//! - [`base_url`] - Public base URL from HTTP headers

pub mod base_url;
pub mod code_generator;
pub mod short_code;
pub mod url_normalizer;

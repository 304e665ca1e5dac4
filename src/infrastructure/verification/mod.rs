//! Bot verification for the encode endpoint.
//!
//! - [`RecaptchaVerifier`] - Google reCAPTCHA v3
//! - [`NullVerifier`] - No-op, used when verification is not configured

pub mod null_verifier;
pub mod recaptcha;

pub use null_verifier::NullVerifier;
pub use recaptcha::{RecaptchaVerifier, SiteVerifyResponse};

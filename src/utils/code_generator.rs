//! Random short code generation.
//!
//! Codes are drawn uniformly from the 62-character alphanumeric alphabet using
//! the thread-local CSPRNG, so generators carry no shared mutable state.

use crate::domain::errors::ShortenerError;
use crate::domain::generator::CodeGenerator;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Default short code length.
pub const DEFAULT_CODE_LENGTH: usize = 10;

/// Codes that collide with literal routes and could never redirect.
pub const RESERVED_CODES: &[&str] = &["encode", "decode", "health"];

/// Returns true if `code` is shadowed by a literal route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Generates a random alphanumeric code of `length` characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(10);
/// assert_eq!(code.len(), 10);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// The `random` algorithm: fresh randomness on every call.
///
/// The URL and attempt number are ignored; uniqueness comes from the store
/// retrying on collision.
#[derive(Debug, Clone, Copy)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    /// Creates a generator producing codes of `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::InvalidCodeLength`] if `length` is zero.
    pub fn new(length: usize) -> Result<Self, ShortenerError> {
        if length == 0 {
            return Err(ShortenerError::InvalidCodeLength(length));
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, _url: &str, _attempt: usize) -> String {
        generate_code(self.length)
    }
}

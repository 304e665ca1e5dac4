//! Stateless reversible URL codec.

/// Turns a URL into a self-contained token and back, without storage.
///
/// `decode` folds every failure (bad encoding, truncation, wrong key,
/// tampering) into `None`: tokens come from untrusted input.
#[cfg_attr(test, mockall::automock)]
pub trait UrlCodec: Send + Sync {
    fn encode(&self, plaintext: &str) -> String;

    fn decode(&self, token: &str) -> Option<String>;
}

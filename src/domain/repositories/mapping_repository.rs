//! Repository trait for the persisted short code mapping.

use crate::domain::errors::ShortenerError;

/// Bijective, durable association between short codes and long URLs.
///
/// All mutation goes through [`MappingRepository::fetch_or_create`]; the
/// underlying map is never exposed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileMappingStore`] - JSON file with atomic rewrites
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait MappingRepository: Send + Sync {
    /// Returns the code for `url`, creating and persisting one if needed.
    ///
    /// Calling this again with the same URL returns the same code without
    /// touching durable storage.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::GenerationExhausted`] if no free code was found,
    /// or [`ShortenerError::Persistence`] if the snapshot could not be written.
    fn fetch_or_create(&self, url: &str) -> Result<String, ShortenerError>;

    /// Looks up the URL for `code`. Never mutates.
    fn find(&self, code: &str) -> Option<String>;

    /// Number of stored mappings.
    fn count(&self) -> usize;
}

//! Candidate short code generation.

/// Produces candidate short codes for the mapping store.
///
/// Implementations are pure: they never look at storage, so a candidate may
/// collide and the store retries with the next `attempt`. The `url` and
/// `attempt` arguments let deterministic algorithms derive codes from their
/// input; random algorithms are free to ignore them.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a candidate code for `url` on the zero-based `attempt`.
    fn generate(&self, url: &str, attempt: usize) -> String;
}

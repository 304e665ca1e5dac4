//! Repository trait definitions for the domain layer.
//!
//! - [`MappingRepository`] - Short code <-> URL mapping
//!
//! Implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for testing.

pub mod mapping_repository;

pub use mapping_repository::MappingRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;

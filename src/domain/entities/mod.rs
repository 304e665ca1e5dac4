//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`MappingSnapshot`] - The durable bidirectional code/URL mapping
//! - [`Algorithm`] - Strategy selector fixed at startup

pub mod algorithm;
pub mod mapping;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use mapping::MappingSnapshot;

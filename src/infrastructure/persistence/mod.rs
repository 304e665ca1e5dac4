//! File-backed mapping store for the `random` algorithm.
//!
//! # Repositories
//!
//! - [`FileMappingStore`] - Bidirectional code/URL map mirrored to a JSON file

pub mod file_mapping_store;

pub use file_mapping_store::{FileMappingStore, MAX_GENERATION_ATTEMPTS};

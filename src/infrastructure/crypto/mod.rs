//! Authenticated-encryption codec for the `keyed_hash` algorithm.

pub mod keyed_cipher;

pub use keyed_cipher::{KeyedCipher, derive_key};

//! Short code algorithm selector.

use std::fmt;
use std::str::FromStr;

/// Selects how URLs map to short codes for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Random codes kept in the persisted mapping store.
    Random,
    /// Stateless authenticated-encryption tokens; nothing is stored.
    KeyedHash,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Random => "random",
            Algorithm::KeyedHash => "keyed_hash",
        }
    }

    /// Returns true when this algorithm needs the mapping store.
    pub fn uses_store(&self) -> bool {
        matches!(self, Algorithm::Random)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognised algorithm names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}', expected 'random' or 'keyed_hash'")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Algorithm::Random),
            "keyed_hash" => Ok(Algorithm::KeyedHash),
            other => Err(UnknownAlgorithm(other.to_string())),
        }
    }
}

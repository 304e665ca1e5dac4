//! Errors raised by the short-code resolution engine.

use std::path::PathBuf;

/// Failures of the mapping store and code generator.
///
/// Codec decode failures are not represented here: an unreadable token is an
/// ordinary `None` result, not an error.
#[derive(Debug, thiserror::Error)]
pub enum ShortenerError {
    /// No free short code was found within the attempt ceiling.
    #[error("unable to generate a unique short code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// The backing file exists but is not a valid mapping snapshot.
    #[error("mapping store file is corrupted: {}", path.display())]
    CorruptedStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backing file parsed, but its two directions disagree.
    #[error("mapping store file is inconsistent: {} ({reason})", path.display())]
    InconsistentStore { path: PathBuf, reason: String },

    /// Reading or atomically replacing the backing file failed.
    #[error("failed to persist mapping store at {}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Another store instance, possibly in another process, owns the file.
    #[error("mapping store at {} is in use by another process", path.display())]
    StoreLocked {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured code length cannot produce a code.
    #[error("short code length must be positive, got {0}")]
    InvalidCodeLength(usize),
}

impl ShortenerError {
    /// Returns true for errors that indicate an unusable backing file.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Self::CorruptedStore { .. } | Self::InconsistentStore { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_exhausted_message() {
        let err = ShortenerError::GenerationExhausted { attempts: 10_000 };
        assert_eq!(
            err.to_string(),
            "unable to generate a unique short code after 10000 attempts"
        );
        assert!(!err.is_corruption());
    }

    #[test]
    fn test_corrupted_store_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ShortenerError::CorruptedStore {
            path: PathBuf::from("data/store.json"),
            source,
        };

        assert!(err.to_string().contains("data/store.json"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.is_corruption());
    }
}

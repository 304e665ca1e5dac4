//! Strategy dispatch between the mapping store and the keyed codec.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::codec::UrlCodec;
use crate::domain::entities::Algorithm;
use crate::domain::errors::ShortenerError;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::crypto::KeyedCipher;
use crate::infrastructure::persistence::FileMappingStore;
use crate::utils::code_generator::RandomCodeGenerator;

#[derive(Clone)]
enum Strategy {
    Store(Arc<dyn MappingRepository>),
    Codec(Arc<dyn UrlCodec>),
}

/// Single entry point for turning URLs into codes and back.
///
/// The strategy is fixed at construction: either a persisted mapping store
/// (`random`) or a stateless codec (`keyed_hash`), never both. Both strategies
/// are synchronous and may block on file I/O, so async callers should run
/// them on a blocking thread.
#[derive(Clone)]
pub struct ShortenerService {
    strategy: Strategy,
}

impl ShortenerService {
    pub fn with_store(store: Arc<dyn MappingRepository>) -> Self {
        Self {
            strategy: Strategy::Store(store),
        }
    }

    pub fn with_codec(codec: Arc<dyn UrlCodec>) -> Self {
        Self {
            strategy: Strategy::Codec(codec),
        }
    }

    /// Builds the strategy selected by `config.algorithm`.
    ///
    /// # Errors
    ///
    /// In `random` mode, fails when the code length is zero or the store file
    /// cannot be loaded. `keyed_hash` mode never touches the store file.
    pub fn from_config(config: &Config) -> Result<Self, ShortenerError> {
        match config.algorithm {
            Algorithm::Random => {
                let generator = RandomCodeGenerator::new(config.code_length)?;
                let store = FileMappingStore::open(&config.data_path, generator)?;
                Ok(Self::with_store(Arc::new(store)))
            }
            Algorithm::KeyedHash => Ok(Self::with_codec(Arc::new(KeyedCipher::new(
                &config.shortlink_key,
            )))),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self.strategy {
            Strategy::Store(_) => Algorithm::Random,
            Strategy::Codec(_) => Algorithm::KeyedHash,
        }
    }

    /// Returns the code for `url`. The URL must already be validated.
    ///
    /// Store mode is idempotent; codec mode yields a fresh token per call.
    pub fn encode(&self, url: &str) -> Result<String, ShortenerError> {
        match &self.strategy {
            Strategy::Store(store) => store.fetch_or_create(url),
            Strategy::Codec(codec) => Ok(codec.encode(url)),
        }
    }

    /// Resolves a code to its URL, or `None` if it is unknown or invalid.
    pub fn decode(&self, code: &str) -> Option<String> {
        match &self.strategy {
            Strategy::Store(store) => store.find(code),
            Strategy::Codec(codec) => codec.decode(code),
        }
    }

    /// Number of stored mappings; `None` in codec mode.
    pub fn mapping_count(&self) -> Option<usize> {
        match &self.strategy {
            Strategy::Store(store) => Some(store.count()),
            Strategy::Codec(_) => None,
        }
    }
}

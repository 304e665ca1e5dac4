//! JSON file implementation of [`MappingRepository`].

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use fs2::FileExt;
use tracing::{debug, info, trace};

use crate::domain::entities::MappingSnapshot;
use crate::domain::errors::ShortenerError;
use crate::domain::generator::CodeGenerator;
use crate::domain::repositories::MappingRepository;
use crate::utils::code_generator::is_reserved;

/// Upper bound on generator calls for a single new mapping.
pub const MAX_GENERATION_ATTEMPTS: usize = 10_000;

/// Mapping store kept in memory and mirrored to a JSON file.
///
/// A single mutex guards the whole state. `fetch_or_create` holds it across
/// lookup, generation, insert and the file rewrite, so two concurrent
/// requests can never create two codes for one URL, and the file on disk
/// always reflects a prefix of the write order.
///
/// Every insert rewrites the full snapshot to `<path>.tmp` and renames it over
/// `<path>`, so readers and restarts never see a partially written file.
///
/// The store holds an exclusive advisory lock on `<path>.lock` for its whole
/// lifetime. A second store on the same path, in this process or another,
/// fails to open instead of writing over mappings it cannot see.
pub struct FileMappingStore<G: CodeGenerator> {
    path: PathBuf,
    generator: G,
    state: Mutex<MappingSnapshot>,
    _lock: File,
}

impl<G: CodeGenerator> FileMappingStore<G> {
    /// Loads the store from `path`.
    ///
    /// A missing or blank file starts an empty store.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::CorruptedStore`] if the file is not a valid snapshot
    /// - [`ShortenerError::InconsistentStore`] if the two directions disagree
    /// - [`ShortenerError::StoreLocked`] if another store owns the file
    /// - [`ShortenerError::Persistence`] if the file cannot be read
    pub fn open(path: impl Into<PathBuf>, generator: G) -> Result<Self, ShortenerError> {
        let path = path.into();
        let lock = acquire_lock(&path)?;
        let snapshot = load_snapshot(&path)?;

        info!(
            path = %path.display(),
            mappings = snapshot.len(),
            "Mapping store loaded"
        );

        Ok(Self {
            path,
            generator,
            state: Mutex::new(snapshot),
            _lock: lock,
        })
    }

    /// Backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, MappingSnapshot> {
        // State is only mutated after the fallible steps succeed, so a
        // poisoned guard still holds a consistent snapshot.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Asks the generator for candidates until one is free for `url`.
    fn next_code(&self, state: &MappingSnapshot, url: &str) -> Result<String, ShortenerError> {
        for attempt in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = self.generator.generate(url, attempt);

            if is_reserved(&candidate) {
                trace!(attempt, "Reserved short code, retrying");
                continue;
            }

            match state.url_for(&candidate) {
                None => return Ok(candidate),
                Some(existing) if existing == url => return Ok(candidate),
                Some(_) => trace!(attempt, "Short code collision, retrying"),
            }
        }

        Err(ShortenerError::GenerationExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}

impl<G: CodeGenerator> MappingRepository for FileMappingStore<G> {
    fn fetch_or_create(&self, url: &str) -> Result<String, ShortenerError> {
        let mut state = self.lock();

        if let Some(existing) = state.code_for(url) {
            return Ok(existing.to_string());
        }

        let code = self.next_code(&state, url)?;
        state.insert(code.clone(), url.to_string());

        if let Err(err) = write_snapshot(&self.path, &state) {
            state.remove(&code, url);
            return Err(err);
        }

        debug!(code = %code, mappings = state.len(), "Created short code mapping");

        Ok(code)
    }

    fn find(&self, code: &str) -> Option<String> {
        self.lock().url_for(code).map(str::to_string)
    }

    fn count(&self) -> usize {
        self.lock().len()
    }
}

/// Creates the parent directory and takes the exclusive lock for `path`.
fn acquire_lock(path: &Path) -> Result<File, ShortenerError> {
    let persistence = |source: io::Error| ShortenerError::Persistence {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(persistence)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(sibling_path(path, ".lock"))
        .map_err(persistence)?;

    FileExt::try_lock_exclusive(&file).map_err(|source| ShortenerError::StoreLocked {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(file)
}

/// Reads and validates the snapshot stored at `path`.
fn load_snapshot(path: &Path) -> Result<MappingSnapshot, ShortenerError> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(MappingSnapshot::default());
        }
        Err(source) => {
            return Err(ShortenerError::Persistence {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(MappingSnapshot::default());
    }

    let snapshot: MappingSnapshot =
        serde_json::from_slice(&raw).map_err(|source| ShortenerError::CorruptedStore {
            path: path.to_path_buf(),
            source,
        })?;

    snapshot
        .check_consistency()
        .map_err(|reason| ShortenerError::InconsistentStore {
            path: path.to_path_buf(),
            reason,
        })?;

    Ok(snapshot)
}

/// Atomically replaces the file at `path` with `snapshot`.
fn write_snapshot(path: &Path, snapshot: &MappingSnapshot) -> Result<(), ShortenerError> {
    let persistence = |source: io::Error| ShortenerError::Persistence {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(persistence)?;
    }

    let payload = serde_json::to_vec(snapshot).map_err(|e| persistence(io::Error::from(e)))?;

    let temp_path = temp_path_for(path);
    let mut file = File::create(&temp_path).map_err(persistence)?;
    file.write_all(&payload).map_err(persistence)?;
    file.sync_all().map_err(persistence)?;
    drop(file);

    fs::rename(&temp_path, path).map_err(persistence)
}

fn temp_path_for(path: &Path) -> PathBuf {
    sibling_path(path, ".tmp")
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

//! Durable snapshot of the bidirectional short code mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full mapping state, as written to the backing file.
///
/// Serialized as a JSON object with exactly two string-to-string maps:
///
/// ```json
/// {
///   "short_to_url": { "aZ3kQ9pL0x": "https://example.com" },
///   "url_to_short": { "https://example.com": "aZ3kQ9pL0x" }
/// }
/// ```
///
/// `BTreeMap` keeps the file output stable across rewrites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingSnapshot {
    pub short_to_url: BTreeMap<String, String>,
    pub url_to_short: BTreeMap<String, String>,
}

impl MappingSnapshot {
    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.short_to_url.len()
    }

    pub fn is_empty(&self) -> bool {
        self.short_to_url.is_empty()
    }

    pub fn url_for(&self, code: &str) -> Option<&str> {
        self.short_to_url.get(code).map(String::as_str)
    }

    pub fn code_for(&self, url: &str) -> Option<&str> {
        self.url_to_short.get(url).map(String::as_str)
    }

    /// Records `code <-> url` in both directions.
    ///
    /// Callers must have checked that neither side is already taken by a
    /// different partner.
    pub fn insert(&mut self, code: String, url: String) {
        self.url_to_short.insert(url.clone(), code.clone());
        self.short_to_url.insert(code, url);
    }

    /// Undoes an [`Self::insert`] whose snapshot could not be persisted.
    pub fn remove(&mut self, code: &str, url: &str) {
        self.short_to_url.remove(code);
        self.url_to_short.remove(url);
    }

    /// Checks that both maps describe the same bijection.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason for the first mismatch found.
    pub fn check_consistency(&self) -> Result<(), String> {
        if self.short_to_url.len() != self.url_to_short.len() {
            return Err(format!(
                "short_to_url has {} entries but url_to_short has {}",
                self.short_to_url.len(),
                self.url_to_short.len()
            ));
        }

        for (code, url) in &self.short_to_url {
            match self.url_to_short.get(url) {
                Some(reverse) if reverse == code => {}
                Some(reverse) => {
                    return Err(format!(
                        "code '{code}' maps to '{url}' but that url maps back to '{reverse}'"
                    ));
                }
                None => return Err(format!("url '{url}' has no reverse entry")),
            }
        }

        Ok(())
    }
}

//! AES-256-GCM implementation of [`UrlCodec`].
//!
//! A token is `nonce (12) || tag (16) || ciphertext`, encoded as URL-safe
//! base64 without padding. The key is the SHA-256 digest of the configured
//! secret, so any process sharing the secret can decode any token.

use std::fmt;

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce, Tag};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

use crate::domain::codec::UrlCodec;

pub const NONCE_LEN: usize = 12;
pub const TAG_LEN: usize = 16;

/// Stateless reversible codec keyed by a shared secret.
#[derive(Clone)]
pub struct KeyedCipher {
    key: [u8; 32],
    cipher: Aes256Gcm,
}

impl KeyedCipher {
    pub fn new(secret: &str) -> Self {
        let key = derive_key(secret);
        Self {
            key,
            cipher: Aes256Gcm::new(&key.into()),
        }
    }

    /// Short identifier of the derived key.
    ///
    /// Two deployments print the same fingerprint exactly when they share a
    /// secret; the key itself cannot be recovered from it.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.key);
        URL_SAFE_NO_PAD.encode(digest)[..8].to_string()
    }
}

/// SHA-256 of the secret string.
pub fn derive_key(secret: &str) -> [u8; 32] {
    Sha256::digest(secret.as_bytes()).into()
}

impl fmt::Debug for KeyedCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedCipher")
            .field("fingerprint", &self.fingerprint())
            .finish_non_exhaustive()
    }
}

impl UrlCodec for KeyedCipher {
    fn encode(&self, plaintext: &str) -> String {
        let mut nonce = [0u8; NONCE_LEN];
        getrandom::fill(&mut nonce).expect("Failed to generate random bytes");

        let mut buffer = plaintext.as_bytes().to_vec();
        // Only fails past the GCM plaintext limit of 64 GiB.
        let tag = self
            .cipher
            .encrypt_in_place_detached(Nonce::from_slice(&nonce), b"", &mut buffer)
            .expect("AES-GCM encryption failed");

        let mut token = Vec::with_capacity(NONCE_LEN + TAG_LEN + buffer.len());
        token.extend_from_slice(&nonce);
        token.extend_from_slice(&tag);
        token.extend_from_slice(&buffer);

        URL_SAFE_NO_PAD.encode(token)
    }

    fn decode(&self, token: &str) -> Option<String> {
        let raw = URL_SAFE_NO_PAD.decode(token.as_bytes()).ok()?;
        if raw.len() <= NONCE_LEN + TAG_LEN {
            return None;
        }

        let (nonce, rest) = raw.split_at(NONCE_LEN);
        let (tag, ciphertext) = rest.split_at(TAG_LEN);

        let mut buffer = ciphertext.to_vec();
        self.cipher
            .decrypt_in_place_detached(
                Nonce::from_slice(nonce),
                b"",
                &mut buffer,
                Tag::from_slice(tag),
            )
            .ok()?;

        String::from_utf8(buffer).ok()
    }
}

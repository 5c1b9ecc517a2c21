use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::config::{KEY_SIZE, NONCE_SIZE};
use crate::error::{Result, VaultError};

/// AES-256-GCM wrapper bound to one derived key.
///
/// The nonce is an explicit argument rather than being prepended to the
/// ciphertext: the container format stores it as its own field, so the
/// cipher layer deals in pure ciphertext-plus-tag.
pub struct AesCipher {
    aead: Aes256Gcm,
}

impl AesCipher {
    pub fn new(key: &[u8; KEY_SIZE]) -> Self {
        let aead = Aes256Gcm::new_from_slice(key).expect("valid key size");
        Self { aead }
    }

    /// Seals the plaintext, returning ciphertext with the 16-byte tag
    /// appended.
    ///
    /// # Errors
    ///
    /// [`VaultError::KeyDerivation`] on primitive failure, which for GCM
    /// only happens on pathological input sizes.
    pub fn encrypt(&self, nonce: &[u8; NONCE_SIZE], plaintext: &[u8]) -> Result<Vec<u8>> {
        self.aead
            .encrypt(Nonce::from_slice(nonce), plaintext)
            .map_err(|e| VaultError::KeyDerivation(format!("AES-GCM encryption failed: {e}")))
    }

    /// Opens ciphertext-plus-tag, verifying the authentication tag.
    ///
    /// # Errors
    ///
    /// [`VaultError::Authentication`] when the tag does not verify. A wrong
    /// password and corrupted bytes are indistinguishable here by design.
    pub fn decrypt(&self, nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.aead
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| VaultError::Authentication)
    }
}

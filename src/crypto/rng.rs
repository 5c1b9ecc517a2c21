//! Entropy plumbing for salts and nonces.
//!
//! The RNG is an explicit parameter rather than a hidden global so that the
//! pipeline can be driven deterministically from tests with a seeded
//! [`rand::rngs::StdRng`]. Production callers pass [`rand::rng()`].

use rand::{CryptoRng, RngCore};

use crate::config::{NONCE_SIZE, SALT_SIZE};

/// Generates a fresh KDF salt.
///
/// Called once per encryption, never reused, even across files in a batch.
pub fn fresh_salt<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; SALT_SIZE] {
    let mut salt = [0u8; SALT_SIZE];
    rng.fill_bytes(&mut salt);
    salt
}

/// Generates a fresh GCM nonce.
///
/// Nonce reuse under the same key breaks GCM entirely; the salt/nonce pair
/// is regenerated together for every single encryption.
pub fn fresh_nonce<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; NONCE_SIZE] {
    let mut nonce = [0u8; NONCE_SIZE];
    rng.fill_bytes(&mut nonce);
    nonce
}

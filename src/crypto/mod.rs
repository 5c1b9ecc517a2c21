//! Cryptographic primitives: key derivation, the AEAD cipher, and the
//! entropy plumbing that feeds them.

pub mod cipher;
pub mod derive;
pub mod rng;

pub use cipher::AesCipher;
pub use derive::derive_key;
pub use rng::{fresh_nonce, fresh_salt};

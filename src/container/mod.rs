//! The `.ag` container format.
//!
//! A container is the self-contained serialized form of one encrypted file:
//! format version, the original file's name and MIME type, the per-encryption
//! salt and nonce, and the ciphertext with its GCM tag. Containers exist only
//! transiently in memory; their persisted form is the byte sequence produced
//! by [`serializer::encode`] and consumed by [`deserializer::decode`].
//!
//! # Wire layout (little-endian throughout)
//!
//! ```text
//! u32 version
//! u32 filename_len | filename bytes (UTF-8)
//! u32 mime_len     | mime bytes (UTF-8)
//! u32 salt_len     | salt (16 bytes)
//! u32 nonce_len    | nonce (12 bytes)
//! u32 content_len  | ciphertext ‖ tag
//! ```
//!
//! No padding, no alignment, no trailing bytes.

use crate::config::{NONCE_SIZE, SALT_SIZE};

pub mod deserializer;
pub mod serializer;

pub use deserializer::decode;
pub use serializer::encode;

/// In-memory form of one encrypted file.
///
/// Never mutated after creation: decode builds a fresh value, encode reads
/// one without touching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedContainer {
    /// Format version; the only supported value is
    /// [`crate::config::CONTAINER_VERSION`].
    pub version: u32,

    /// Name of the source file, recovered verbatim on decrypt.
    pub original_filename: String,

    /// MIME type of the source file, `application/octet-stream` when unknown.
    pub original_mime_type: String,

    /// Random per-encryption KDF salt. Fresh for every encryption, even
    /// within a batch, so identical passwords never share a key.
    pub salt: [u8; SALT_SIZE],

    /// Random per-encryption GCM nonce. Must never repeat under one key.
    pub nonce: [u8; NONCE_SIZE],

    /// Ciphertext with the 16-byte authentication tag appended.
    pub encrypted_content: Vec<u8>,
}

impl EncryptedContainer {
    /// Exact size of the encoded form in bytes: six u32 prefixes plus the
    /// four variable-length fields.
    pub fn encoded_len(&self) -> usize {
        6 * 4
            + self.original_filename.len()
            + self.original_mime_type.len()
            + SALT_SIZE
            + NONCE_SIZE
            + self.encrypted_content.len()
    }
}

#[cfg(test)]
pub(crate) fn sample_container() -> EncryptedContainer {
    EncryptedContainer {
        version: crate::config::CONTAINER_VERSION,
        original_filename: "report.pdf".to_string(),
        original_mime_type: "application/pdf".to_string(),
        salt: [7u8; SALT_SIZE],
        nonce: [9u8; NONCE_SIZE],
        encrypted_content: vec![0xAB; 48],
    }
}

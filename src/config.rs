//! Global configuration constants.
//!
//! Every parameter that both the encrypt and decrypt paths must agree on
//! lives here. The KDF iteration count and hash are part of the container
//! contract: changing either without bumping [`CONTAINER_VERSION`] breaks
//! every previously written container.

/// Application name used in user interfaces.
pub const APP_NAME: &str = "AgVault";

/// File extension for encrypted containers.
///
/// A naming convention used as a quick pre-check before decryption, not a
/// format guarantee. The real validation is the container decode itself.
pub const FILE_EXTENSION: &str = ".ag";

/// Container format version written into every container.
///
/// Exactly one version is supported; decode rejects anything else.
pub const CONTAINER_VERSION: u32 = 1;

// === PBKDF2 Key Derivation Parameters ===

/// PBKDF2-HMAC-SHA256 iteration count.
///
/// 100,000 iterations keeps interactive use responsive while making offline
/// guessing expensive. This value is baked into the format contract.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Length of the per-encryption random salt in bytes.
pub const SALT_SIZE: usize = 16;

/// Length of the derived AES-256 key in bytes.
pub const KEY_SIZE: usize = 32;

// === AEAD Parameters ===

/// Size of the AES-GCM nonce in bytes.
///
/// 96 bits is the recommended GCM nonce size. A fresh nonce is generated
/// for every encryption; reuse under the same key would be catastrophic.
pub const NONCE_SIZE: usize = 12;

/// Size of the GCM authentication tag appended to the ciphertext.
pub const TAG_SIZE: usize = 16;

// === Input Policy ===

/// Maximum size of a source file in bytes (1 GiB).
///
/// A policy limit, not a protocol limit: the whole plaintext and the whole
/// ciphertext are held in memory simultaneously, so this caps peak usage.
pub const MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Minimum accepted password length.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Password length that counts toward the "strong" tier.
pub const PASSWORD_STRONG_LENGTH: usize = 12;

/// MIME type recorded when the source file's type cannot be guessed.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Group name used for a batch when the caller supplies none.
pub const DEFAULT_GROUP_NAME: &str = "encrypted_files";

/// Maximum filename length accepted inside a container.
pub const MAX_FILENAME_LENGTH: usize = 255;

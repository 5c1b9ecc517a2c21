//! Classified failure kinds for the encryption core.
//!
//! The core never logs or prints; every failure is returned to the caller as
//! one of these variants. Presentation layers may phrase them however they
//! like, but the classification itself is fixed here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VaultError {
    /// A precondition failed before any cryptographic work started:
    /// empty password, empty or oversized source, missing `.ag` marker.
    /// Always recoverable by correcting the input.
    #[error("{0}")]
    Validation(String),

    /// The container bytes do not parse as a well-formed container
    /// (truncated, trailing garbage, or an unsupported version).
    #[error("invalid or corrupted container: {0}")]
    Format(String),

    /// AEAD tag verification failed during decryption.
    ///
    /// The cipher cannot distinguish a wrong password from tampered bytes,
    /// so neither can we. Do not attempt to classify further here.
    #[error("authentication failed: wrong password or corrupted data")]
    Authentication,

    /// The key-derivation primitive itself failed. Not expected in normal
    /// operation and never retried.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl VaultError {
    /// Shorthand for a validation failure with a formatted message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Shorthand for a format failure with a formatted message.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, VaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = VaultError::validation("password cannot be empty");
        assert_eq!(err.to_string(), "password cannot be empty");

        let err = VaultError::format("unsupported version");
        assert!(err.to_string().contains("corrupted container"));

        let err = VaultError::Authentication;
        assert!(err.to_string().contains("wrong password"));
    }
}

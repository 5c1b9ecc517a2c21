use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;

use crate::config::{KEY_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};
use crate::error::{Result, VaultError};

/// Stretches a password and salt into a 256-bit AES key.
///
/// PBKDF2-HMAC-SHA256 at [`PBKDF2_ITERATIONS`] rounds. Both sides of the
/// format call this with identical parameters; the salt comes from the
/// container on decrypt and from fresh randomness on encrypt.
///
/// # Errors
///
/// [`VaultError::KeyDerivation`] when the primitive itself fails, which is
/// fatal and not user-recoverable. An empty password is a
/// [`VaultError::Validation`] precondition caught here as a last line of
/// defense.
pub fn derive_key(password: &[u8], salt: &[u8; SALT_SIZE]) -> Result<[u8; KEY_SIZE]> {
    if password.is_empty() {
        return Err(VaultError::validation("password cannot be empty"));
    }

    let mut key = [0u8; KEY_SIZE];
    pbkdf2::<Hmac<Sha256>>(password, salt, PBKDF2_ITERATIONS, &mut key)
        .map_err(|e| VaultError::KeyDerivation(format!("PBKDF2 failed: {e}")))?;

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_inputs_same_key() {
        let salt = [3u8; SALT_SIZE];
        let a = derive_key(b"correct horse battery", &salt).unwrap();
        let b = derive_key(b"correct horse battery", &salt).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_salt_changes_key() {
        let a = derive_key(b"same password", &[0u8; SALT_SIZE]).unwrap();
        let b = derive_key(b"same password", &[1u8; SALT_SIZE]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_password_changes_key() {
        let salt = [5u8; SALT_SIZE];
        let a = derive_key(b"password-one", &salt).unwrap();
        let b = derive_key(b"password-two", &salt).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_password_rejected() {
        let err = derive_key(b"", &[0u8; SALT_SIZE]).unwrap_err();
        assert!(matches!(err, VaultError::Validation(_)));
    }
}

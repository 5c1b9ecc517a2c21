//! The single-file cipher pipeline.
//!
//! Drives one file through read → derive → cipher → codec and back,
//! reporting advisory progress at fixed milestones. Nothing here touches
//! persistent storage; both directions return plain byte payloads and leave
//! writing to the caller.

use std::path::Path;

use rand::{CryptoRng, RngCore};

use crate::config::{CONTAINER_VERSION, MAX_FILENAME_LENGTH};
use crate::container::{self, EncryptedContainer};
use crate::crypto::{derive_key, fresh_nonce, fresh_salt, AesCipher};
use crate::error::{Result, VaultError};
use crate::file::{check_source, guess_mime, is_container_file, naming, read_source};
use crate::secret::Password;

/// Result of encrypting one file: the encoded container bytes and the
/// conventional output name (source name plus `.ag`).
#[derive(Debug)]
pub struct EncryptedOutput {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

/// Result of decrypting one container. Name and MIME type come from the
/// container itself, never from the encrypted artifact's on-disk name.
#[derive(Debug)]
pub struct DecryptedOutput {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

/// Encrypts one file into container bytes.
///
/// Progress milestones: 20 after validation, 30 after salt/nonce
/// generation, 50 after key derivation, 70 after the file read, 90 after
/// the AEAD seal, 100 once the container is encoded. The callback is
/// advisory only and runs synchronously on the caller's task.
///
/// # Errors
///
/// [`VaultError::Validation`] for an empty password or an empty/oversized
/// source, [`VaultError::KeyDerivation`] on primitive failure,
/// [`VaultError::Io`] when the read itself fails.
pub async fn encrypt_file<R, F>(path: &Path, password: &Password, rng: &mut R, mut on_progress: F) -> Result<EncryptedOutput>
where
    R: RngCore + CryptoRng,
    F: FnMut(u8),
{
    if password.is_empty() {
        return Err(VaultError::validation("password cannot be empty"));
    }

    check_source(path).await?;

    let file_name = naming::display_name(path);
    if file_name.len() > MAX_FILENAME_LENGTH {
        return Err(VaultError::validation(format!("filename exceeds {MAX_FILENAME_LENGTH} bytes")));
    }
    on_progress(20);

    let salt = fresh_salt(rng);
    let nonce = fresh_nonce(rng);
    on_progress(30);

    let key = derive_key(password.expose_secret().as_bytes(), &salt)?;
    on_progress(50);

    // Revalidates at the read so a file swapped out after the early check
    // is still subject to the same size policy.
    let plaintext = read_source(path).await?;
    on_progress(70);

    let encrypted_content = AesCipher::new(&key).encrypt(&nonce, &plaintext)?;
    on_progress(90);

    let container = EncryptedContainer {
        version: CONTAINER_VERSION,
        original_filename: file_name.clone(),
        original_mime_type: guess_mime(path).to_string(),
        salt,
        nonce,
        encrypted_content,
    };

    let bytes = container::encode(&container);
    on_progress(100);

    Ok(EncryptedOutput { bytes, file_name: naming::encrypted_name(&file_name) })
}

/// Decrypts one container file back into its original payload.
///
/// Progress milestones mirror encryption in reverse emphasis: 20 after the
/// marker check, 40 after the read, 60 after decode, 80 after key
/// derivation, 95 after the AEAD open, 100 on completion.
///
/// # Errors
///
/// [`VaultError::Validation`] when the input lacks the `.ag` marker,
/// [`VaultError::Format`] when the bytes do not decode as a container, and
/// [`VaultError::Authentication`] when the tag fails to verify; the last
/// deliberately does not distinguish a wrong password from corruption.
pub async fn decrypt_file<F>(path: &Path, password: &Password, mut on_progress: F) -> Result<DecryptedOutput>
where
    F: FnMut(u8),
{
    if password.is_empty() {
        return Err(VaultError::validation("password cannot be empty"));
    }

    if !is_container_file(path) {
        return Err(VaultError::validation(format!(
            "\"{}\" does not appear to be an encrypted container",
            path.display()
        )));
    }
    on_progress(20);

    let raw = tokio::fs::read(path).await?;
    on_progress(40);

    let container = container::decode(&raw)?;
    on_progress(60);

    let key = derive_key(password.expose_secret().as_bytes(), &container.salt)?;
    on_progress(80);

    let bytes = AesCipher::new(&key).decrypt(&container.nonce, &container.encrypted_content)?;
    on_progress(95);

    let output = DecryptedOutput { bytes, file_name: container.original_filename, mime_type: container.original_mime_type };
    on_progress(100);

    Ok(output)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    use super::*;
    use crate::config::TAG_SIZE;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_encrypt_decrypt_roundtrip() {
        let dir = tempdir().unwrap();
        let src = write_fixture(&dir, "notes.txt", b"some very private notes");
        let password = Password::new("correct-horse-9");

        let mut rng = StdRng::seed_from_u64(1);
        let encrypted = encrypt_file(&src, &password, &mut rng, |_| {}).await.unwrap();
        assert_eq!(encrypted.file_name, "notes.txt.ag");

        let container_path = write_fixture(&dir, "notes.txt.ag", &encrypted.bytes);
        let decrypted = decrypt_file(&container_path, &password, |_| {}).await.unwrap();

        assert_eq!(decrypted.bytes, b"some very private notes");
        assert_eq!(decrypted.file_name, "notes.txt");
        assert_eq!(decrypted.mime_type, "text/plain");
    }

    #[tokio::test]
    async fn test_wrong_password_fails_closed() {
        let dir = tempdir().unwrap();
        let src = write_fixture(&dir, "secret.bin", &[0x55; 256]);

        let mut rng = StdRng::seed_from_u64(2);
        let encrypted = encrypt_file(&src, &Password::new("password-one"), &mut rng, |_| {}).await.unwrap();
        let container_path = write_fixture(&dir, "secret.bin.ag", &encrypted.bytes);

        let err = decrypt_file(&container_path, &Password::new("password-two"), |_| {}).await.unwrap_err();
        assert!(matches!(err, VaultError::Authentication));
    }

    #[tokio::test]
    async fn test_tampered_content_fails_authentication() {
        let dir = tempdir().unwrap();
        let src = write_fixture(&dir, "data.bin", b"tamper target payload");

        let mut rng = StdRng::seed_from_u64(3);
        let mut encrypted = encrypt_file(&src, &Password::new("valid-password"), &mut rng, |_| {}).await.unwrap();

        // flip one bit inside the ciphertext region (the final field)
        let content_start = encrypted.bytes.len() - b"tamper target payload".len() - TAG_SIZE;
        encrypted.bytes[content_start] ^= 0x01;

        let container_path = write_fixture(&dir, "data.bin.ag", &encrypted.bytes);
        let err = decrypt_file(&container_path, &Password::new("valid-password"), |_| {}).await.unwrap_err();
        assert!(matches!(err, VaultError::Authentication));
    }

    #[tokio::test]
    async fn test_fresh_salt_and_nonce_per_encryption() {
        let dir = tempdir().unwrap();
        let src = write_fixture(&dir, "same.txt", b"identical input");
        let password = Password::new("same-password");

        let mut rng = rand::rng();
        let first = encrypt_file(&src, &password, &mut rng, |_| {}).await.unwrap();
        let second = encrypt_file(&src, &password, &mut rng, |_| {}).await.unwrap();

        let a = crate::container::decode(&first.bytes).unwrap();
        let b = crate::container::decode(&second.bytes).unwrap();
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.nonce, b.nonce);
        assert_ne!(a.encrypted_content, b.encrypted_content);
    }

    #[tokio::test]
    async fn test_progress_is_monotonic_and_ends_at_100() {
        let dir = tempdir().unwrap();
        let src = write_fixture(&dir, "progress.txt", b"watch me go");
        let password = Password::new("progress-pass");

        let mut ticks = Vec::new();
        let mut rng = StdRng::seed_from_u64(4);
        let encrypted = encrypt_file(&src, &password, &mut rng, |p| ticks.push(p)).await.unwrap();

        assert!(ticks.windows(2).all(|w| w[0] <= w[1]), "not monotonic: {ticks:?}");
        assert_eq!(ticks.last(), Some(&100));

        let container_path = write_fixture(&dir, "progress.txt.ag", &encrypted.bytes);
        let mut ticks = Vec::new();
        decrypt_file(&container_path, &password, |p| ticks.push(p)).await.unwrap();

        assert!(ticks.windows(2).all(|w| w[0] <= w[1]), "not monotonic: {ticks:?}");
        assert_eq!(ticks.last(), Some(&100));
    }

    #[tokio::test]
    async fn test_empty_password_rejected_before_any_work() {
        let dir = tempdir().unwrap();
        let src = write_fixture(&dir, "x.txt", b"content");

        let mut ticks = Vec::new();
        let mut rng = StdRng::seed_from_u64(5);
        let err = encrypt_file(&src, &Password::new(""), &mut rng, |p| ticks.push(p)).await.unwrap_err();

        assert!(matches!(err, VaultError::Validation(_)));
        assert!(ticks.is_empty());
    }

    #[tokio::test]
    async fn test_missing_marker_rejected() {
        let dir = tempdir().unwrap();
        let src = write_fixture(&dir, "plain.txt", b"not a container");

        let err = decrypt_file(&src, &Password::new("whatever-pass"), |_| {}).await.unwrap_err();
        assert!(matches!(err, VaultError::Validation(_)));
    }

    #[tokio::test]
    async fn test_garbage_container_is_format_error() {
        let dir = tempdir().unwrap();
        let src = write_fixture(&dir, "garbage.ag", b"\x01\x00\x00\x00nonsense");

        let err = decrypt_file(&src, &Password::new("whatever-pass"), |_| {}).await.unwrap_err();
        assert!(matches!(err, VaultError::Format(_)));
    }

    #[tokio::test]
    async fn test_empty_source_rejected() {
        let dir = tempdir().unwrap();
        let src = write_fixture(&dir, "empty.txt", b"");

        let mut rng = StdRng::seed_from_u64(6);
        let err = encrypt_file(&src, &Password::new("valid-password"), &mut rng, |_| {}).await.unwrap_err();
        assert!(matches!(err, VaultError::Validation(_)));
    }
}
